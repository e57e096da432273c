//! Record Digest Value Object
//!
//! The integrity digest written into a wheel's RECORD file for every entry.
//! Installers recompute it over the raw entry bytes and compare strings, so
//! the rendering must be exact: `sha256=` followed by the URL-safe base64
//! encoding of the SHA-256 digest with `=` padding stripped.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Integrity digest of an archive entry payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordDigest(String);

impl RecordDigest {
    /// Algorithm prefix used in RECORD rows
    pub const PREFIX: &'static str = "sha256=";

    /// Compute the digest of raw payload bytes
    pub fn from_bytes(payload: &[u8]) -> Self {
        let hash = Sha256::digest(payload);
        Self(format!("{}{}", Self::PREFIX, URL_SAFE_NO_PAD.encode(hash)))
    }

    /// Get the full digest string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the encoded part without prefix
    pub fn encoded(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check if this digest matches a rendered RECORD field
    pub fn matches_str(&self, s: &str) -> bool {
        self.0 == s
    }
}

impl fmt::Display for RecordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
