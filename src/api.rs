//! Shared capability surface for the four identifier engines.
//!
//! Each format keeps its own record shape (plain structs, value equality,
//! no polymorphic base type); what they have in common is only the calling
//! convention, captured by [`Engine`]:
//!
//! - `extract_all` parses once and returns the full structured record; a
//!   caller that wants a single field projects it from the record instead
//!   of re-parsing per field.
//! - `validate` answers the "give me a boolean" entry point.
//! - `parse_one` propagates absence: a missing input maps to a missing
//!   record without touching the parser. This is the seam a row-oriented
//!   host layer calls once per row.

use crate::cusip::{CusipEngine, CusipRecord};
use crate::iban::{IbanEngine, IbanRecord};
use crate::isin::{IsinEngine, IsinRecord};
use crate::url::{UrlEngine, UrlRecord};

/// The capability set every identifier engine provides.
///
/// Engines are stateless unit structs; all methods are associated
/// functions. Every implementation is a pure function of its input:
/// deterministic, no I/O, no shared mutable state, safe to run
/// concurrently from any number of threads.
pub trait Engine {
    /// The fixed-shape record this format decomposes into.
    type Record;

    /// Parse `input` and return everything that can be extracted from it,
    /// or `None` when the format yields all-absent fields for this input.
    fn extract_all(input: &str) -> Option<Self::Record>;

    /// Whether `input` is a syntactically and checksum-valid instance of
    /// this format.
    fn validate(input: &str) -> bool;

    /// Elementwise entry point: absence in, absence out.
    fn parse_one(input: Option<&str>) -> Option<Self::Record> {
        input.and_then(Self::extract_all)
    }
}

impl Engine for IbanEngine {
    type Record = IbanRecord;

    fn extract_all(input: &str) -> Option<IbanRecord> {
        // The record itself carries failure (is_valid + reason), so every
        // string input produces a record.
        Some(IbanEngine::parse(input))
    }

    fn validate(input: &str) -> bool {
        IbanEngine::parse(input).is_valid
    }
}

impl Engine for IsinEngine {
    type Record = IsinRecord;

    fn extract_all(input: &str) -> Option<IsinRecord> {
        Some(IsinEngine::parse(input))
    }

    fn validate(input: &str) -> bool {
        IsinEngine::parse(input).is_valid
    }
}

impl Engine for CusipEngine {
    type Record = CusipRecord;

    fn extract_all(input: &str) -> Option<CusipRecord> {
        // Invalid CUSIPs yield all-absent records, not partial ones.
        CusipEngine::parse(input)
    }

    fn validate(input: &str) -> bool {
        CusipEngine::parse(input).is_some()
    }
}

impl Engine for UrlEngine {
    type Record = UrlRecord;

    fn extract_all(input: &str) -> Option<UrlRecord> {
        Some(UrlEngine::parse(input))
    }

    fn validate(input: &str) -> bool {
        UrlEngine::parse(input).is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absence_propagates_without_parsing() {
        assert!(IbanEngine::parse_one(None).is_none());
        assert!(IsinEngine::parse_one(None).is_none());
        assert!(CusipEngine::parse_one(None).is_none());
        assert!(UrlEngine::parse_one(None).is_none());
    }

    #[test]
    fn present_input_produces_records() {
        assert!(IbanEngine::parse_one(Some("DE44500105175407324931")).is_some());
        assert!(IsinEngine::parse_one(Some("US0378331005")).is_some());
        assert!(CusipEngine::parse_one(Some("303075105")).is_some());
        assert!(UrlEngine::parse_one(Some("https://example.com/")).is_some());
    }

    #[test]
    fn engines_are_deterministic() {
        // Same input twice, identical record both times.
        let inputs = ["DE44500105175407324931", "not an identifier", ""];
        for s in inputs {
            assert_eq!(IbanEngine::parse(s), IbanEngine::parse(s));
            assert_eq!(IsinEngine::parse(s), IsinEngine::parse(s));
            assert_eq!(CusipEngine::parse(s), CusipEngine::parse(s));
            assert_eq!(UrlEngine::parse(s), UrlEngine::parse(s));
        }
    }

    #[test]
    fn validate_agrees_with_extract_all() {
        let cases = [
            "DE44500105175407324931",
            "US0378331005",
            "303075105",
            "https://example.com/",
            "garbage",
        ];
        for s in cases {
            assert_eq!(IbanEngine::validate(s), IbanEngine::extract_all(s).is_some_and(|r| r.is_valid));
            assert_eq!(IsinEngine::validate(s), IsinEngine::extract_all(s).is_some_and(|r| r.is_valid));
            assert_eq!(CusipEngine::validate(s), CusipEngine::extract_all(s).is_some());
            assert_eq!(UrlEngine::validate(s), UrlEngine::extract_all(s).is_some_and(|r| r.is_valid));
        }
    }
}
