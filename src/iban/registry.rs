//! Per-country BBAN layouts, curated from the ISO 13616 IBAN registry.
//!
//! The dataset is closed and versioned with the code: a country missing
//! here is a normal parse-failure branch ("Invalid country code"), never a
//! runtime error. Offsets are relative to the BBAN (the part after the
//! country code and check digits).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// One registry entry: total IBAN length plus the bank/branch identifier
/// positions inside the BBAN as `(offset, length)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BbanLayout {
    pub iban_len: u8,
    pub bank: Option<(u8, u8)>,
    pub branch: Option<(u8, u8)>,
}

const fn entry(iban_len: u8, bank: Option<(u8, u8)>, branch: Option<(u8, u8)>) -> BbanLayout {
    BbanLayout { iban_len, bank, branch }
}

/// Look up the layout for a two-letter country code, if registered.
pub(crate) fn layout_for(country_code: &str) -> Option<&'static BbanLayout> {
    COUNTRY_BBAN_TABLE.get(country_code)
}

static COUNTRY_BBAN_TABLE: Lazy<HashMap<&'static str, BbanLayout>> = Lazy::new(|| {
    HashMap::from([
        ("AD", entry(24, Some((0, 4)), Some((4, 4)))),
        ("AE", entry(23, Some((0, 3)), None)),
        ("AL", entry(28, Some((0, 3)), Some((3, 4)))),
        ("AT", entry(20, Some((0, 5)), None)),
        ("AZ", entry(28, Some((0, 4)), None)),
        ("BA", entry(20, Some((0, 3)), Some((3, 3)))),
        ("BE", entry(16, Some((0, 3)), None)),
        ("BG", entry(22, Some((0, 4)), Some((4, 4)))),
        ("BH", entry(22, Some((0, 4)), None)),
        ("BR", entry(29, Some((0, 8)), Some((8, 5)))),
        ("BY", entry(28, Some((0, 4)), None)),
        ("CH", entry(21, Some((0, 5)), None)),
        ("CR", entry(22, Some((0, 4)), None)),
        ("CY", entry(28, Some((0, 3)), Some((3, 5)))),
        ("CZ", entry(24, Some((0, 4)), None)),
        ("DE", entry(22, Some((0, 8)), None)),
        ("DK", entry(18, Some((0, 4)), None)),
        ("DO", entry(28, Some((0, 4)), None)),
        ("EE", entry(20, Some((0, 2)), None)),
        ("EG", entry(29, Some((0, 4)), Some((4, 4)))),
        ("ES", entry(24, Some((0, 4)), Some((4, 4)))),
        ("FI", entry(18, Some((0, 3)), None)),
        ("FO", entry(18, Some((0, 4)), None)),
        ("FR", entry(27, Some((0, 5)), Some((5, 5)))),
        ("GB", entry(22, Some((0, 4)), Some((4, 6)))),
        ("GE", entry(22, Some((0, 2)), None)),
        ("GI", entry(23, Some((0, 4)), None)),
        ("GL", entry(18, Some((0, 4)), None)),
        ("GR", entry(27, Some((0, 3)), Some((3, 4)))),
        ("GT", entry(28, Some((0, 4)), None)),
        ("HR", entry(21, Some((0, 7)), None)),
        ("HU", entry(28, Some((0, 3)), Some((3, 4)))),
        ("IE", entry(22, Some((0, 4)), Some((4, 6)))),
        ("IL", entry(23, Some((0, 3)), Some((3, 3)))),
        ("IQ", entry(23, Some((0, 4)), Some((4, 3)))),
        ("IS", entry(26, Some((0, 2)), Some((2, 2)))),
        ("IT", entry(27, Some((1, 5)), Some((6, 5)))),
        ("JO", entry(30, Some((0, 4)), Some((4, 4)))),
        ("KW", entry(30, Some((0, 4)), None)),
        ("KZ", entry(20, Some((0, 3)), None)),
        ("LB", entry(28, Some((0, 4)), None)),
        ("LC", entry(32, Some((0, 4)), None)),
        ("LI", entry(21, Some((0, 5)), None)),
        ("LT", entry(20, Some((0, 5)), None)),
        ("LU", entry(20, Some((0, 3)), None)),
        ("LV", entry(21, Some((0, 4)), None)),
        ("MC", entry(27, Some((0, 5)), Some((5, 5)))),
        ("MD", entry(24, Some((0, 2)), None)),
        ("ME", entry(22, Some((0, 3)), None)),
        ("MK", entry(19, Some((0, 3)), None)),
        ("MR", entry(27, Some((0, 5)), Some((5, 3)))),
        ("MT", entry(31, Some((0, 4)), Some((4, 5)))),
        ("MU", entry(30, Some((0, 6)), Some((6, 2)))),
        ("NL", entry(18, Some((0, 4)), None)),
        ("NO", entry(15, Some((0, 4)), None)),
        ("PK", entry(24, Some((0, 4)), None)),
        ("PL", entry(28, Some((0, 3)), Some((3, 4)))),
        ("PS", entry(29, Some((0, 4)), None)),
        ("PT", entry(25, Some((0, 4)), Some((4, 4)))),
        ("QA", entry(29, Some((0, 4)), None)),
        ("RO", entry(24, Some((0, 4)), None)),
        ("RS", entry(22, Some((0, 3)), None)),
        ("SA", entry(24, Some((0, 2)), None)),
        ("SC", entry(31, Some((0, 6)), Some((6, 2)))),
        ("SE", entry(24, Some((0, 3)), None)),
        ("SI", entry(19, Some((0, 2)), Some((2, 3)))),
        ("SK", entry(24, Some((0, 4)), None)),
        ("SM", entry(27, Some((1, 5)), Some((6, 5)))),
        ("ST", entry(25, Some((0, 4)), Some((4, 4)))),
        ("SV", entry(28, Some((0, 4)), None)),
        ("TL", entry(23, Some((0, 3)), None)),
        ("TN", entry(24, Some((0, 2)), Some((2, 3)))),
        ("TR", entry(26, Some((0, 5)), None)),
        ("UA", entry(29, Some((0, 6)), None)),
        ("VA", entry(22, Some((0, 3)), None)),
        ("VG", entry(24, Some((0, 4)), None)),
        ("XK", entry(20, Some((0, 2)), Some((2, 2)))),
    ])
});
