//! Host parsing: domain names, dotted-quad IPv4 and bracketed IPv6
//! literals. Purely syntactic — no DNS, no IDNA mapping beyond ASCII
//! lowercasing.

/// A parsed authority host. IP hosts are kept in their source spelling
/// (brackets included for IPv6); domains are lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Host {
    Domain(String),
    Ipv4(String),
    Ipv6(String),
}

impl Host {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Host::Domain(s) | Host::Ipv4(s) | Host::Ipv6(s) => s,
        }
    }

    pub(crate) fn is_ip(&self) -> bool {
        !matches!(self, Host::Domain(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostError {
    InvalidIpv6,
    InvalidCharacter,
}

/// WHATWG forbidden host code points (the subset that can survive our
/// authority split; `/`, `?`, `#`, `@` and `:` are consumed earlier).
fn is_forbidden(c: char) -> bool {
    c.is_ascii_control()
        || matches!(c, ' ' | '%' | '/' | ':' | '?' | '#' | '@' | '[' | ']' | '\\' | '^' | '<' | '>' | '|' | '"')
}

/// Parse a nonempty host string (userinfo and port already stripped).
pub(crate) fn parse_host(raw: &str) -> Result<Host, HostError> {
    debug_assert!(!raw.is_empty());

    if let Some(inner) = raw.strip_prefix('[') {
        let Some(inner) = inner.strip_suffix(']') else {
            return Err(HostError::InvalidIpv6);
        };
        if !is_ipv6(inner) {
            return Err(HostError::InvalidIpv6);
        }
        return Ok(Host::Ipv6(raw.to_ascii_lowercase()));
    }

    if raw.chars().any(is_forbidden) {
        return Err(HostError::InvalidCharacter);
    }
    if is_ipv4(raw) {
        return Ok(Host::Ipv4(raw.to_string()));
    }
    Ok(Host::Domain(raw.to_ascii_lowercase()))
}

/// Dotted-quad IPv4: exactly four nonempty decimal parts, each 0-255.
fn is_ipv4(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 4
        && parts.iter().all(|p| {
            !p.is_empty() && p.len() <= 3 && p.bytes().all(|b| b.is_ascii_digit()) && p.parse::<u16>().is_ok_and(|n| n <= 255)
        })
}

/// Syntactic IPv6 check: hex groups of 1-4 digits separated by `:`, at
/// most one `::` elision, optionally a trailing embedded IPv4 in place of
/// the last two groups. Exactly eight groups when nothing is elided.
fn is_ipv6(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }

    let elisions = s.matches("::").count();
    if elisions > 1 || s.contains(":::") {
        return false;
    }
    let elided = elisions == 1;

    // "::" at either end leaves an empty side; split_once keeps that empty
    // side out of the group count.
    let (head, tail) = match s.split_once("::") {
        Some((h, t)) => (h, t),
        None => {
            if s.starts_with(':') || s.ends_with(':') {
                return false;
            }
            (s, "")
        }
    };

    let mut groups = 0usize;
    for (side, is_tail) in [(head, !elided), (tail, true)] {
        if side.is_empty() {
            continue;
        }
        if side.starts_with(':') || side.ends_with(':') {
            return false;
        }
        let parts: Vec<&str> = side.split(':').collect();
        for (i, part) in parts.iter().enumerate() {
            let last = is_tail && i == parts.len() - 1;
            if last && part.contains('.') {
                // Embedded IPv4 stands for two 16-bit groups.
                if !is_ipv4(part) {
                    return false;
                }
                groups += 2;
            } else {
                if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return false;
                }
                groups += 1;
            }
        }
    }

    if elided { groups < 8 } else { groups == 8 }
}
