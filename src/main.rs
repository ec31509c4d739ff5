use std::io::{self, Read};

use istr::cusip::CusipEngine;
use istr::iban::IbanEngine;
use istr::isin::IsinEngine;
use istr::url::UrlEngine;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let input = match config.input {
        Some(input) => input,
        None => {
            let mut buf = String::new();
            if io::stdin().read_to_string(&mut buf).is_err() {
                eprintln!("error: could not read stdin");
                std::process::exit(2);
            }
            buf.trim().to_string()
        }
    };

    print_record(config.format, &input);
}

#[derive(Clone, Copy)]
enum Format {
    Iban,
    Isin,
    Cusip,
    Url,
}

struct CliConfig {
    format: Format,
    input: Option<String>,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut args = std::env::args().skip(1);

    let format = match args.next().as_deref() {
        Some("-h") | Some("--help") | None => {
            print_help();
            std::process::exit(0);
        }
        Some("-V") | Some("--version") => {
            println!("istr {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Some("iban") => Format::Iban,
        Some("isin") => Format::Isin,
        Some("cusip") => Format::Cusip,
        Some("url") => Format::Url,
        Some(other) => {
            return Err(format!("error: unknown format {other:?} (expected iban, isin, cusip or url)"));
        }
    };

    let input = args.next();
    if args.next().is_some() {
        return Err("error: expected at most one input".to_string());
    }
    Ok(CliConfig { format, input })
}

fn print_help() {
    println!("istr — parse and validate identifier strings");
    println!();
    println!("Usage: istr <iban|isin|cusip|url> [INPUT]");
    println!();
    println!("Reads INPUT (or stdin) as one identifier of the given format and");
    println!("prints its decomposed fields. Invalid input is reported, never an");
    println!("error exit: every string has an answer.");
}

fn field(name: &str, value: Option<&str>) {
    match value {
        Some(v) => println!("{name:>18}: {v}"),
        None => println!("{name:>18}: -"),
    }
}

fn flag(name: &str, value: bool) {
    println!("{name:>18}: {value}");
}

fn print_record(format: Format, input: &str) {
    match format {
        Format::Iban => {
            let rec = IbanEngine::parse(input);
            field("country_code", rec.country_code.as_deref());
            field("check_digits", rec.check_digits.as_deref());
            field("bban", rec.bban.as_deref());
            field("bank_id", rec.bank_id.as_deref());
            field("branch_id", rec.branch_id.as_deref());
            flag("is_valid", rec.is_valid);
            field("reason", Some(rec.check()));
        }
        Format::Isin => {
            let rec = IsinEngine::parse(input);
            let cd = rec.check_digit.map(String::from);
            field("country_code", rec.country_code.as_deref());
            field("security_id", rec.security_id.as_deref());
            field("check_digit", cd.as_deref());
            flag("is_valid", rec.is_valid);
        }
        Format::Cusip => match CusipEngine::parse(input) {
            Some(rec) => {
                let cc = rec.country_code.map(String::from);
                let cd = String::from(rec.check_digit);
                field("issuer_num", Some(rec.issuer_num.as_str()));
                field("issue_num", Some(rec.issue_num.as_str()));
                field("check_digit", Some(cd.as_str()));
                field("payload", Some(rec.payload.as_str()));
                field("country_code", cc.as_deref());
                flag("is_cins", rec.is_cins);
                flag("is_cins_base", rec.is_cins_base);
                flag("is_cins_extended", rec.is_cins_extended);
                flag("is_private_issue", rec.is_private_issue);
                flag("has_private_issuer", rec.has_private_issuer);
                flag("is_private_use", rec.is_private_use);
            }
            None => println!("cannot be parsed as a CUSIP"),
        },
        Format::Url => {
            let rec = UrlEngine::parse(input);
            let port = rec.port.map(|p| p.to_string());
            field("scheme", rec.scheme.as_deref());
            field("host", rec.host.as_deref());
            field("domain", rec.domain.as_deref());
            field("port", port.as_deref());
            field("path", rec.path.as_deref());
            field("query", rec.query.as_deref());
            field("fragment", rec.fragment.as_deref());
            flag("is_special", rec.is_special);
            flag("is_valid", rec.is_valid);
            field("reason", Some(rec.check()));
        }
    }
}
