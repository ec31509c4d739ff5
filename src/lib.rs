//! `istr` — parser/validator engines for machine-readable identifier strings.
//!
//! Four sibling engines, each a pure function from one input string to one
//! structured record:
//!
//! - [`iban::IbanEngine`] — IBAN bank account numbers (ISO 13616), driven by
//!   a static per-country BBAN layout table.
//! - [`isin::IsinEngine`] — ISIN security identifiers (ISO 6166).
//! - [`cusip::CusipEngine`] — CUSIP/CINS North-American security identifiers.
//! - [`url::UrlEngine`] — WHATWG-style syntactic URL decomposition.
//!
//! The engines share no runtime state and are independently testable. Each
//! one is *total*: every input string maps to a record (or, for CUSIP, to
//! `None`), never to a panic. Malformed input degrades to "cannot be parsed",
//! surfaced as absent fields plus a validity flag and, for IBAN and URL, a
//! short fixed-vocabulary diagnostic.
//!
//! The common capability set — `validate`, `extract_all` and the
//! absence-propagating `parse_one` — lives in the [`Engine`] trait. Callers
//! that only want one field run `extract_all` once and project from the
//! record; there are no per-field parsing passes to keep in sync.
//!
//! ```
//! use istr::iban::IbanEngine;
//!
//! let rec = IbanEngine::parse("DE44500105175407324931");
//! assert!(rec.is_valid);
//! assert_eq!(rec.bank_id.as_deref(), Some("50010517"));
//! ```

#[macro_use]
mod macros;
mod api;

pub mod cusip;
pub mod iban;
pub mod isin;
pub mod url;

pub use api::Engine;
