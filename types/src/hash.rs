//! Transaction hash type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction hash as reported by the payload library (lowercase hex).
///
/// The hash is treated as an opaque unique identifier; it is the lookup
/// key for cached summaries and for persisted transaction notes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Abbreviate in debug output; full hashes drown log lines. Char
        // iteration keeps this safe even for non-ASCII input.
        let head: String = self.0.chars().take(8).collect();
        write!(f, "TxHash({head}…)")
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_full_hash() {
        let hash = TxHash::new("04734caac4e2ae7feba9b74fb8d2c145db9ea9651487371c4d741428f8f5a24b");
        assert_eq!(
            hash.to_string(),
            "04734caac4e2ae7feba9b74fb8d2c145db9ea9651487371c4d741428f8f5a24b"
        );
    }

    #[test]
    fn debug_abbreviates() {
        let hash = TxHash::new("04734caac4e2ae7f0000");
        assert_eq!(format!("{hash:?}"), "TxHash(04734caa…)");
    }

    #[test]
    fn debug_handles_short_hashes() {
        let hash = TxHash::new("abc");
        assert_eq!(format!("{hash:?}"), "TxHash(abc…)");
    }

    #[test]
    fn debug_does_not_panic_on_multibyte_input() {
        // The payload library should only produce hex, but a malformed
        // hash must not bring down a log line.
        let hash = TxHash::new("ééééé‱‱‱‱‱");
        assert_eq!(format!("{hash:?}"), "TxHash(ééééé‱‱‱…)");
    }
}
