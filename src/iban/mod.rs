//! IBAN parsing and validation (ISO 13616, ISO 7064 MOD 97-10).
//!
//! An IBAN is a two-letter country code, two check digits and a
//! country-specific BBAN (basic bank account number). The shape gate and
//! checksum are format-global; length and the bank/branch sub-fields come
//! from the per-country layouts in [`registry`].
//!
//! Extraction is best-effort: once the string has the plausible
//! `[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}` shape, the raw splits (country code,
//! check digits, BBAN) are reported even when a later check fails. Only the
//! table-derived fields (`bank_id`, `branch_id`) require every check to
//! pass. The `reason` field reports the *first* failing check, in the fixed
//! order: format, country, length, checksum.

mod registry;
#[cfg(test)]
mod tests;

use std::fmt;

pub use registry::BbanLayout;

/// Diagnostic outcome of an IBAN parse, one per check, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IbanStatus {
    /// All checks passed.
    Ok,
    /// Input does not have the two-letter / two-digit / BBAN shape.
    InvalidFormat,
    /// Country code is not in the BBAN layout registry.
    InvalidCountryCode,
    /// Total length disagrees with the country's registered length.
    InvalidLength,
    /// MOD 97-10 remainder is not 1.
    InvalidChecksum,
}

impl IbanStatus {
    /// The fixed diagnostic string for this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            IbanStatus::Ok => "ok",
            IbanStatus::InvalidFormat => "Invalid format",
            IbanStatus::InvalidCountryCode => "Invalid country code",
            IbanStatus::InvalidLength => "Invalid length",
            IbanStatus::InvalidChecksum => "Invalid checksum",
        }
    }
}

impl fmt::Display for IbanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decomposition of one IBAN string.
///
/// `country_code`, `check_digits` and `bban` are raw splits and survive
/// length/checksum failures; `bank_id` and `branch_id` are sliced from the
/// BBAN via the country layout and are only present on a fully valid IBAN
/// (and even then `branch_id` is absent for countries whose layout has no
/// branch field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IbanRecord {
    pub country_code: Option<String>,
    pub check_digits: Option<String>,
    pub bban: Option<String>,
    pub bank_id: Option<String>,
    pub branch_id: Option<String>,
    pub is_valid: bool,
    pub reason: IbanStatus,
}

impl IbanRecord {
    fn rejected(reason: IbanStatus) -> Self {
        IbanRecord {
            country_code: None,
            check_digits: None,
            bban: None,
            bank_id: None,
            branch_id: None,
            is_valid: false,
            reason,
        }
    }

    /// The diagnostic string behind `reason` ("ok" on success).
    pub fn check(&self) -> &'static str {
        self.reason.as_str()
    }
}

/// Stateless IBAN engine.
pub struct IbanEngine;

impl IbanEngine {
    /// Parse and validate one IBAN string. Total: never panics, every
    /// input maps to a record.
    pub fn parse(input: &str) -> IbanRecord {
        if !regex!(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").is_match(input) {
            return IbanRecord::rejected(IbanStatus::InvalidFormat);
        }

        let mut rec = IbanRecord {
            country_code: Some(input[..2].to_string()),
            check_digits: Some(input[2..4].to_string()),
            bban: Some(input[4..].to_string()),
            bank_id: None,
            branch_id: None,
            is_valid: false,
            reason: IbanStatus::Ok,
        };

        let Some(layout) = registry::layout_for(&input[..2]) else {
            rec.reason = IbanStatus::InvalidCountryCode;
            return rec;
        };
        if input.len() != layout.iban_len as usize {
            rec.reason = IbanStatus::InvalidLength;
            return rec;
        }
        if mod97_rearranged(input) != 1 {
            rec.reason = IbanStatus::InvalidChecksum;
            return rec;
        }

        let bban = &input[4..];
        rec.bank_id = layout.bank.map(|(off, len)| slice_field(bban, off, len));
        rec.branch_id = layout.branch.map(|(off, len)| slice_field(bban, off, len));
        rec.is_valid = true;
        rec
    }
}

fn slice_field(bban: &str, off: u8, len: u8) -> String {
    bban[off as usize..(off + len) as usize].to_string()
}

/// ISO 7064 MOD 97-10 remainder of the rearranged IBAN.
///
/// The first four characters move to the end, letters expand to two-digit
/// base-36 numerals (A=10 .. Z=35), and the resulting decimal numeral — up
/// to 68 digits for a 34-character IBAN — is reduced in 7-digit blocks,
/// carrying the remainder forward. The accumulator peaks below
/// 97 * 10^7, so a `u32` suffices; no big integer is ever built.
fn mod97_rearranged(input: &str) -> u32 {
    debug_assert!(input.len() >= 4);

    let mut digits = String::with_capacity(input.len() * 2);
    for b in input.bytes().skip(4).chain(input.bytes().take(4)) {
        match b {
            b'0'..=b'9' => digits.push(b as char),
            b'A'..=b'Z' => {
                let v = u32::from(b - b'A') + 10;
                digits.push(char::from(b'0' + (v / 10) as u8));
                digits.push(char::from(b'0' + (v % 10) as u8));
            }
            // Unreachable past the shape gate; treated as digit 0.
            _ => digits.push('0'),
        }
    }

    let mut rem: u32 = 0;
    for chunk in digits.as_bytes().chunks(7) {
        let mut block = rem;
        for &d in chunk {
            block = block * 10 + u32::from(d - b'0');
        }
        rem = block % 97;
    }
    rem
}
