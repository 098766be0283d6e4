//! Content fingerprints used as cache keys and image file names.

use std::fmt;

use md5::{Digest, Md5};

/// Deterministic digest of a diagram's source text.
///
/// Lowercase hex MD5 of the exact source bytes (32 characters). Identical
/// source text always yields the same fingerprint, wherever the block sits in
/// the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of `source`.
    #[must_use]
    pub fn of(source: &str) -> Self {
        let digest = Md5::digest(source.as_bytes());
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
