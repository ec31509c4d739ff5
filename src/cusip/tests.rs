use pretty_assertions::assert_eq;

use super::{CusipEngine, CusipRecord, check_digit};

fn parse(s: &str) -> Option<CusipRecord> {
    CusipEngine::parse(s)
}

#[test]
fn plain_cusip_decomposition() {
    let rec = parse("303075105").unwrap();
    assert_eq!(rec.issuer_num, "303075");
    assert_eq!(rec.issue_num, "10");
    assert_eq!(rec.check_digit, '5');
    assert_eq!(rec.payload, "30307510");
    assert_eq!(rec.country_code, None);
    assert!(!rec.is_cins);
    // Policy: a plain CUSIP reports the CINS sub-flags as false, not absent.
    assert!(!rec.is_cins_base);
    assert!(!rec.is_cins_extended);
    assert!(!rec.is_private_use);
}

#[test]
fn cins_decomposition() {
    let rec = parse("G0052B105").unwrap();
    assert_eq!(rec.issuer_num, "G0052B");
    assert_eq!(rec.issue_num, "10");
    assert_eq!(rec.check_digit, '5');
    assert_eq!(rec.country_code, Some('G'));
    assert!(rec.is_cins);
    // G is not in the excluded set {I, O, Z}.
    assert!(rec.is_cins_base);
    assert!(!rec.is_cins_extended);
}

#[test]
fn cins_base_and_extended_are_mutually_exclusive() {
    // Array of (input, is_cins, is_cins_base, is_cins_extended)
    let cases: Vec<(&str, bool, bool, bool)> = vec![
        ("G0052B105", true, true, false),
        ("I0052B103", true, false, true),
        ("Z0052B104", true, false, true),
        ("303075105", false, false, false),
    ];
    for (input, cins, base, extended) in cases {
        let rec = parse(input).unwrap();
        assert_eq!(rec.is_cins, cins, "{input}");
        assert_eq!(rec.is_cins_base, base, "{input}");
        assert_eq!(rec.is_cins_extended, extended, "{input}");
        assert!(!(rec.is_cins_base && rec.is_cins_extended), "{input}");
    }
}

#[test]
fn private_use_ranges() {
    // Array of (input, is_private_issue, has_private_issuer)
    let cases: Vec<(&str, bool, bool)> = vec![
        // Issue 90 is the bottom of the private issue range.
        ("123456907", true, false),
        // Issuer 990000 is the bottom of the private issuer range.
        ("990000903", true, true),
        ("990000994", true, true),
        // Ordinary issuer, ordinary issue.
        ("000800102", false, false),
        ("303075105", false, false),
        // Letter issuers never fall in the numeric private issuer range.
        ("G0052B105", false, false),
    ];
    for (input, issue, issuer) in cases {
        let rec = parse(input).unwrap();
        assert_eq!(rec.is_private_issue, issue, "{input}");
        assert_eq!(rec.has_private_issuer, issuer, "{input}");
        assert_eq!(rec.is_private_use, issue || issuer, "{input}");
    }
}

#[test]
fn real_world_cusips_validate() {
    // Apple, Microsoft, Oracle.
    for input in ["037833100", "594918104", "68389X105"] {
        assert!(parse(input).is_some(), "{input}");
    }
}

#[test]
fn checksum_mismatch_yields_no_record_at_all() {
    // One off from Apple's 037833100: nothing is extracted, not even the
    // raw splits.
    assert_eq!(parse("037833101"), None);
    assert_eq!(parse("30307510O"), None); // letter in the check position
}

#[test]
fn malformed_shapes_yield_none() {
    let cases = ["", "30307510", "3030751055", "g0052b105", "3030 5105", "30307510-"];
    for input in cases {
        assert_eq!(parse(input), None, "{input}");
    }
}

#[test]
fn check_digit_doubles_even_positions() {
    assert_eq!(check_digit("30307510"), 5);
    assert_eq!(check_digit("G0052B10"), 5);
    assert_eq!(check_digit("03783310"), 0);
    // 'T' lands on a doubled position here; its 29 doubles to 58 and
    // contributes 5 + 8.
    assert_eq!(check_digit("98986T10"), 8);
}
