//! ISIN parsing and validation (ISO 6166).
//!
//! An ISIN is a two-character country prefix, a nine-character NSIN and one
//! decimal check digit, validated with the Luhn algorithm over a base-36
//! expansion of the first eleven characters.
//!
//! Extraction is best-effort: a twelve-character uppercase-alphanumeric
//! string splits fully whether or not the checksum holds, and an
//! eleven-character string (check digit missing) still yields the prefix
//! and NSIN. Anything else leaves every field absent. `is_valid` is true
//! only for the exact twelve-character shape with a matching check digit.


/// Decomposition of one ISIN string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsinRecord {
    pub country_code: Option<String>,
    /// The nine-character NSIN between the prefix and the check digit.
    pub security_id: Option<String>,
    pub check_digit: Option<char>,
    pub is_valid: bool,
}

impl IsinRecord {
    fn empty() -> Self {
        IsinRecord { country_code: None, security_id: None, check_digit: None, is_valid: false }
    }
}

/// Stateless ISIN engine.
pub struct IsinEngine;

impl IsinEngine {
    /// Parse and validate one ISIN string. Total: never panics, every
    /// input maps to a record.
    pub fn parse(input: &str) -> IsinRecord {
        if !regex!(r"^[A-Z0-9]{11,12}$").is_match(input) {
            return IsinRecord::empty();
        }

        let mut rec = IsinRecord {
            country_code: Some(input[..2].to_string()),
            security_id: Some(input[2..11].to_string()),
            check_digit: None,
            is_valid: false,
        };

        // Eleven characters: the check digit is missing, so validity is
        // undecidable and reported as false.
        if input.len() == 12 {
            let check = input.as_bytes()[11];
            rec.check_digit = Some(check as char);
            rec.is_valid = check.is_ascii_digit() && luhn_check(&input[..11]) == check - b'0';
        }
        rec
    }
}

/// Luhn check digit of the eleven-character payload.
///
/// Letters expand to their two-digit base-36 numerals (A=10 .. Z=35) before
/// the alternating doubling, which starts from the rightmost expanded digit
/// (the position directly left of the check digit).
fn luhn_check(payload: &str) -> u8 {
    let mut digits: Vec<u8> = Vec::with_capacity(payload.len() * 2);
    for b in payload.bytes() {
        match b {
            b'0'..=b'9' => digits.push(b - b'0'),
            b'A'..=b'Z' => {
                let v = b - b'A' + 10;
                digits.push(v / 10);
                digits.push(v % 10);
            }
            _ => {}
        }
    }

    let mut sum: u32 = 0;
    let mut double = true;
    for &d in digits.iter().rev() {
        let mut v = u32::from(d);
        if double {
            v *= 2;
            if v > 9 {
                v -= 9;
            }
        }
        sum += v;
        double = !double;
    }
    ((10 - sum % 10) % 10) as u8
}
