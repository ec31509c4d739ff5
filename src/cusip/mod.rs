//! CUSIP/CINS parsing and classification.
//!
//! A CUSIP is a six-character issuer number, a two-character issue number
//! and one decimal check digit. When the issuer number starts with a letter
//! the identifier is a CINS and that letter is a country/region code; CINS
//! identifiers whose leading letter is I, O or Z belong to the "extended"
//! set (those letters are excluded from the base CINS assignment).
//!
//! Unlike IBAN and ISIN there is no partial extraction here: an input that
//! is not exactly nine uppercase-alphanumeric characters, or whose check
//! digit does not match, cannot be parsed at all and yields `None`. A
//! record therefore always describes a checksum-valid identifier and its
//! classification flags are plain booleans.

#[cfg(test)]
mod tests;

/// Decomposition and classification of one valid CUSIP/CINS string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CusipRecord {
    pub issuer_num: String,
    pub issue_num: String,
    pub check_digit: char,
    /// The eight characters preceding the check digit.
    pub payload: String,
    /// CINS country/region letter; absent for a plain CUSIP.
    pub country_code: Option<char>,
    pub is_cins: bool,
    /// CINS whose leading letter is outside the excluded set {I, O, Z}.
    /// Always `false` for a plain CUSIP, never absent.
    pub is_cins_base: bool,
    /// CINS whose leading letter is one of {I, O, Z}.
    pub is_cins_extended: bool,
    /// Issue number in the reserved private range 90-99.
    pub is_private_issue: bool,
    /// Issuer number in the reserved private range 990000-999999.
    pub has_private_issuer: bool,
    pub is_private_use: bool,
}

/// Stateless CUSIP engine.
pub struct CusipEngine;

impl CusipEngine {
    /// Parse one CUSIP/CINS string. Returns `None` when the input is not
    /// exactly nine uppercase-alphanumeric characters or the check digit
    /// does not match; invalid CUSIPs never produce partial records.
    pub fn parse(input: &str) -> Option<CusipRecord> {
        if !regex!(r"^[A-Z0-9]{9}$").is_match(input) {
            return None;
        }
        let payload = &input[..8];
        let check = input.as_bytes()[8];
        if !check.is_ascii_digit() || check_digit(payload) != check - b'0' {
            return None;
        }

        let issuer_num = &input[..6];
        let issue_num = &input[6..8];
        let first = input.as_bytes()[0];
        let is_cins = first.is_ascii_uppercase();
        let is_cins_extended = is_cins && matches!(first, b'I' | b'O' | b'Z');

        let is_private_issue = issue_num.parse::<u8>().is_ok_and(|n| (90..=99).contains(&n));
        let has_private_issuer =
            issuer_num.bytes().all(|b| b.is_ascii_digit()) && issuer_num >= "990000";

        Some(CusipRecord {
            issuer_num: issuer_num.to_string(),
            issue_num: issue_num.to_string(),
            check_digit: check as char,
            payload: payload.to_string(),
            country_code: is_cins.then_some(first as char),
            is_cins,
            is_cins_base: is_cins && !is_cins_extended,
            is_cins_extended,
            is_private_issue,
            has_private_issuer,
            is_private_use: is_private_issue || has_private_issuer,
        })
    }
}

/// CUSIP check digit: base-36 character values, alternating weights 1,2
/// from the leftmost payload character, digit-summing each product.
fn check_digit(payload: &str) -> u8 {
    let mut sum: u32 = 0;
    for (i, b) in payload.bytes().enumerate() {
        let mut v = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'A'..=b'Z' => u32::from(b - b'A') + 10,
            _ => 0,
        };
        if i % 2 == 1 {
            v *= 2;
        }
        sum += v / 10 + v % 10;
    }
    ((10 - sum % 10) % 10) as u8
}
