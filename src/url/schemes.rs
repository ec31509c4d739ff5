//! The fixed table of WHATWG "special" schemes and their default ports.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Special schemes mapped to their default port (`None` for `file`, which
/// has no network port). Closed set, compiled in.
static SPECIAL_SCHEMES: Lazy<HashMap<&'static str, Option<u16>>> = Lazy::new(|| {
    HashMap::from([
        ("ftp", Some(21)),
        ("file", None),
        ("http", Some(80)),
        ("https", Some(443)),
        ("ws", Some(80)),
        ("wss", Some(443)),
    ])
});

/// Whether `scheme` (already lowercased) is in the special set.
pub(crate) fn is_special(scheme: &str) -> bool {
    SPECIAL_SCHEMES.contains_key(scheme)
}

/// The default port for a special scheme, if it has one.
pub(crate) fn default_port(scheme: &str) -> Option<u16> {
    SPECIAL_SCHEMES.get(scheme).copied().flatten()
}
