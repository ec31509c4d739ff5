use pretty_assertions::assert_eq;

use super::{IbanEngine, IbanRecord, IbanStatus, mod97_rearranged};

fn parse(s: &str) -> IbanRecord {
    IbanEngine::parse(s)
}

#[test]
fn valid_iban_full_decomposition() {
    let rec = parse("DE44500105175407324931");
    assert_eq!(rec.country_code.as_deref(), Some("DE"));
    assert_eq!(rec.check_digits.as_deref(), Some("44"));
    assert_eq!(rec.bban.as_deref(), Some("500105175407324931"));
    assert_eq!(rec.bank_id.as_deref(), Some("50010517"));
    // Germany's layout has no branch field.
    assert_eq!(rec.branch_id, None);
    assert!(rec.is_valid);
    assert_eq!(rec.check(), "ok");
}

#[test]
fn best_effort_extraction_fixture() {
    // Array of (input, country_code, check_digits, bban, bank_id, branch_id, reason, is_valid)
    #[rustfmt::skip]
    let cases: Vec<(&str, Option<&str>, Option<&str>, Option<&str>, Option<&str>, Option<&str>, &str, bool)> = vec![
        // Unknown country: raw splits kept, table-derived fields absent.
        ("AA110011123Z5678", Some("AA"), Some("11"), Some("0011123Z5678"), None, None, "Invalid country code", false),
        ("DE44500105175407324931", Some("DE"), Some("44"), Some("500105175407324931"), Some("50010517"), None, "ok", true),
        ("AD1200012030200359100100", Some("AD"), Some("12"), Some("00012030200359100100"), Some("0001"), Some("2030"), "ok", true),
        // Bad check digits: raw splits kept, derived fields absent.
        ("MR0000020001010000123456754", Some("MR"), Some("00"), Some("00020001010000123456754"), None, None, "Invalid checksum", false),
    ];

    for (input, cc, cd, bban, bank, branch, reason, is_valid) in cases {
        let rec = parse(input);
        assert_eq!(rec.country_code.as_deref(), cc, "{input}");
        assert_eq!(rec.check_digits.as_deref(), cd, "{input}");
        assert_eq!(rec.bban.as_deref(), bban, "{input}");
        assert_eq!(rec.bank_id.as_deref(), bank, "{input}");
        assert_eq!(rec.branch_id.as_deref(), branch, "{input}");
        assert_eq!(rec.check(), reason, "{input}");
        assert_eq!(rec.is_valid, is_valid, "{input}");
    }
}

#[test]
fn format_rejection_leaves_all_fields_absent() {
    let cases = [
        "",
        "DE",
        "de44500105175407324931",        // lowercase letters
        "D144500105175407324931",        // digit in country position
        "DEXX500105175407324931",        // letters in check-digit position
        "DE44 5001 0517 5407 3249 31",   // spaces are not repaired
        "DE4450010517540732493150010517540732", // BBAN longer than 30
    ];
    for input in cases {
        let rec = parse(input);
        assert_eq!(rec.reason, IbanStatus::InvalidFormat, "{input}");
        assert!(!rec.is_valid, "{input}");
        assert_eq!(rec.country_code, None, "{input}");
        assert_eq!(rec.check_digits, None, "{input}");
        assert_eq!(rec.bban, None, "{input}");
        assert_eq!(rec.bank_id, None, "{input}");
        assert_eq!(rec.branch_id, None, "{input}");
    }
}

#[test]
fn length_is_checked_before_checksum() {
    // 20 characters, but the German layout requires 22.
    let rec = parse("DE445001051754073249");
    assert_eq!(rec.reason, IbanStatus::InvalidLength);
    assert!(!rec.is_valid);
    assert_eq!(rec.bban.as_deref(), Some("5001051754073249"));
    assert_eq!(rec.bank_id, None);
}

#[test]
fn country_is_checked_before_length() {
    // Unknown country wins over any later diagnosis.
    let rec = parse("AA44500105175407324931");
    assert_eq!(rec.reason, IbanStatus::InvalidCountryCode);
}

#[test]
fn mutating_check_digits_invalidates() {
    let valid = "DE44500105175407324931";
    assert!(parse(valid).is_valid);

    // Any single-digit change in the check digits must be caught.
    for pos in [2usize, 3] {
        for d in b'0'..=b'9' {
            let mut bytes = valid.as_bytes().to_vec();
            if bytes[pos] == d {
                continue;
            }
            bytes[pos] = d;
            let mutated = String::from_utf8(bytes).unwrap();
            let rec = parse(&mutated);
            assert!(!rec.is_valid, "{mutated} should fail");
            assert_eq!(rec.reason, IbanStatus::InvalidChecksum, "{mutated}");
        }
    }
}

#[test]
fn registry_samples_across_layouts() {
    // Official registry sample IBANs; bank/branch per national layout.
    let cases: Vec<(&str, &str, Option<&str>)> = vec![
        ("FR1420041010050500013M02606", "20041", Some("01005")),
        ("GB29NWBK60161331926819", "NWBK", Some("601613")),
        ("NL91ABNA0417164300", "ABNA", None),
        ("ES9121000418450200051332", "2100", Some("0418")),
        ("IT60X0542811101000000123456", "05428", Some("11101")),
        ("NO9386011117947", "8601", None),
    ];
    for (input, bank, branch) in cases {
        let rec = parse(input);
        assert!(rec.is_valid, "{input}: {}", rec.check());
        assert_eq!(rec.bank_id.as_deref(), Some(bank), "{input}");
        assert_eq!(rec.branch_id.as_deref(), branch, "{input}");
    }
}

#[test]
fn mod97_handles_long_numerals_without_overflow() {
    // A 32-character IBAN expands to a numeral of over 40 decimal digits;
    // a naive single-accumulator parse would overflow long before the end.
    let long_valid = [
        "LC55HEMM000100010012001200023015",
        "MT84MALT011000012345MTLCAST001S",
        "BR1800360305000010009795493C1",
    ];
    for input in long_valid {
        assert_eq!(mod97_rearranged(input), 1, "{input}");
        assert!(parse(input).is_valid, "{input}");
    }

    // And the remainder is still exact, not merely nonzero-vs-one.
    assert_ne!(mod97_rearranged("LC55HEMM000100010012001200023016"), 1);
}
