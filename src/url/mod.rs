//! WHATWG-style syntactic URL decomposition.
//!
//! Two-phase parse: scheme extraction first, then a scheme-dependent split
//! of the remainder into authority, path, query and fragment. Special
//! schemes (http, https, ws, wss, ftp, file) follow browser-style rules: any
//! run of slashes after the colon is absorbed, the host is mandatory
//! (except for `file:`), an empty path normalizes to `/` and a port equal
//! to the scheme default is elided. Non-special schemes take an authority
//! only after a literal `//`; otherwise the remainder is an opaque path
//! with no host.
//!
//! Strictly syntactic: no DNS, no fetching, no percent-decoding, no
//! repair of malformed input.

mod host;
mod schemes;
#[cfg(test)]
mod tests;

use std::fmt;

use host::HostError;

/// Diagnostic outcome of a URL parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStatus {
    Ok,
    /// No scheme, so the input only makes sense against a base URL —
    /// which this engine deliberately does not take.
    RelativeWithoutBase,
    /// A special non-file scheme with no host in its authority.
    EmptyHost,
    /// Port is not a decimal number in 0-65535.
    InvalidPort,
    InvalidIpv6,
    /// Forbidden code point in a domain-name host.
    InvalidDomainCharacter,
}

impl UrlStatus {
    /// The fixed diagnostic string for this outcome.
    pub fn as_str(self) -> &'static str {
        match self {
            UrlStatus::Ok => "ok",
            UrlStatus::RelativeWithoutBase => "relative URL without a base",
            UrlStatus::EmptyHost => "empty host",
            UrlStatus::InvalidPort => "invalid port",
            UrlStatus::InvalidIpv6 => "invalid IPv6 address",
            UrlStatus::InvalidDomainCharacter => "invalid domain character",
        }
    }
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decomposition of one URL string.
///
/// `domain` differs from `host` in exactly two ways: it is absent for IP
/// hosts (dotted-quad IPv4 or bracketed IPv6), and a single trailing dot
/// is stripped. `query` and `fragment` are present-and-empty when their
/// delimiter exists with nothing after it, absent when the delimiter is
/// missing entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub domain: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub is_special: bool,
    pub is_valid: bool,
    pub reason: UrlStatus,
}

impl UrlRecord {
    fn rejected(reason: UrlStatus) -> Self {
        UrlRecord {
            scheme: None,
            host: None,
            domain: None,
            port: None,
            path: None,
            query: None,
            fragment: None,
            is_special: false,
            is_valid: false,
            reason,
        }
    }

    /// The diagnostic string behind `reason` ("ok" on success).
    pub fn check(&self) -> &'static str {
        self.reason.as_str()
    }
}

/// Stateless URL engine.
pub struct UrlEngine;

impl UrlEngine {
    /// Parse one string as an absolute URL. Total: never panics, every
    /// input maps to a record; failures carry a fixed diagnostic.
    pub fn parse(input: &str) -> UrlRecord {
        // WHATWG pre-trim: leading/trailing C0 controls and spaces.
        let input = input.trim_matches(|c: char| c <= ' ');

        let Some(caps) = regex!(r"^([a-zA-Z][a-zA-Z0-9+.\-]*):(.*)$").captures(input) else {
            return UrlRecord::rejected(UrlStatus::RelativeWithoutBase);
        };
        let scheme = caps[1].to_ascii_lowercase();
        let rest = caps.get(2).map_or("", |m| m.as_str());
        let is_special = schemes::is_special(&scheme);

        let (authority, tail) = match split_authority(&scheme, is_special, rest) {
            Some((a, t)) => (Some(a), t),
            None => (None, rest),
        };

        let mut rec = UrlRecord {
            scheme: Some(scheme.clone()),
            host: None,
            domain: None,
            port: None,
            path: None,
            query: None,
            fragment: None,
            is_special,
            is_valid: true,
            reason: UrlStatus::Ok,
        };

        if let Some(auth) = authority {
            // Userinfo (anything up to the last '@') is recognized and
            // discarded; the record does not carry credentials.
            let hostport = auth.rsplit_once('@').map_or(auth, |(_, h)| h);

            let (host_raw, port_raw) = split_port(hostport);
            if host_raw.is_empty() {
                if is_special && scheme != "file" {
                    return UrlRecord::rejected(UrlStatus::EmptyHost);
                }
                // file: and non-special URLs may have an empty host.
            } else {
                match host::parse_host(host_raw) {
                    Ok(h) => {
                        if !h.is_ip() {
                            let d = h.as_str();
                            rec.domain = Some(d.strip_suffix('.').unwrap_or(d).to_string());
                        }
                        rec.host = Some(h.as_str().to_string());
                    }
                    Err(HostError::InvalidIpv6) => {
                        return UrlRecord::rejected(UrlStatus::InvalidIpv6);
                    }
                    Err(HostError::InvalidCharacter) => {
                        return UrlRecord::rejected(UrlStatus::InvalidDomainCharacter);
                    }
                }
            }

            if let Some(p) = port_raw {
                // An empty port ("host:") is tolerated and means "none".
                if !p.is_empty() {
                    let Ok(n) = p.parse::<u16>() else {
                        return UrlRecord::rejected(UrlStatus::InvalidPort);
                    };
                    if Some(n) != schemes::default_port(&scheme) {
                        rec.port = Some(n);
                    }
                }
            }
        }

        let (path, query, fragment) = split_path_query_fragment(tail);
        rec.path = Some(if is_special && path.is_empty() { "/".to_string() } else { path.to_string() });
        rec.query = query.map(str::to_string);
        rec.fragment = fragment.map(str::to_string);
        rec
    }
}

/// Carve the authority out of the part after `scheme:`, returning it and
/// the remainder (which starts at `/`, `?` or `#`). `None` means the URL
/// has no authority and the whole remainder is path material.
fn split_authority<'a>(scheme: &str, is_special: bool, rest: &'a str) -> Option<(&'a str, &'a str)> {
    let after_slashes = if is_special && scheme != "file" {
        // Special schemes absorb any run of slashes (including none, and
        // including backslashes, which browsers treat as slashes here).
        rest.trim_start_matches(['/', '\\'])
    } else if let Some(r) = rest.strip_prefix("//") {
        r
    } else {
        return None;
    };

    let end = after_slashes.find(['/', '?', '#']).unwrap_or(after_slashes.len());
    Some((&after_slashes[..end], &after_slashes[end..]))
}

/// Split a `host[:port]` string outside any IPv6 brackets.
fn split_port(hostport: &str) -> (&str, Option<&str>) {
    let colon_search_from = if hostport.starts_with('[') {
        match hostport.find(']') {
            Some(i) => i + 1,
            None => return (hostport, None), // unterminated bracket; host parse will reject
        }
    } else {
        0
    };
    match hostport[colon_search_from..].find(':') {
        Some(i) => {
            let at = colon_search_from + i;
            (&hostport[..at], Some(&hostport[at + 1..]))
        }
        None => (hostport, None),
    }
}

/// Split the post-authority remainder into path, query and fragment. The
/// fragment delimiter wins over the query delimiter, per the URL grammar.
fn split_path_query_fragment(tail: &str) -> (&str, Option<&str>, Option<&str>) {
    let (before_frag, fragment) = match tail.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (tail, None),
    };
    let (path, query) = match before_frag.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (before_frag, None),
    };
    (path, query, fragment)
}
