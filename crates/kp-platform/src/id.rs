//! Canonical platform identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonicalize a raw platform family string.
///
/// Lowercases the input and collapses every run of separators (whitespace,
/// `-`, `.`, `/`, `_`) into a single underscore. Leading and trailing
/// separators are dropped, so `" Mac OS X "` becomes `"mac_os_x"`.
pub fn canonicalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_whitespace() || matches!(ch, '-' | '.' | '/' | '_') {
            pending_separator = true;
            continue;
        }
        if pending_separator && !out.is_empty() {
            out.push('_');
        }
        pending_separator = false;
        out.extend(ch.to_lowercase());
    }

    out
}

/// A canonical platform identifier such as `rhel`, `debian` or `mac_os_x`.
///
/// Platform identifiers double as recipe scope names in configuration
/// documents, so they are always stored in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(String);

impl PlatformId {
    /// Create an identifier from any raw spelling.
    pub fn new(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlatformId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
