//! Compatibility and build tags
//!
//! The compatibility tag is the `{python}-{abi}-{platform}` triple that
//! appears both in the wheel filename and in the WHEEL metadata entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Python / ABI / platform tag triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompatibilityTag {
    pub python: String,
    pub abi: String,
    pub platform: String,
}

impl CompatibilityTag {
    pub fn new(
        python: impl Into<String>,
        abi: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            python: python.into(),
            abi: abi.into(),
            platform: platform.into(),
        }
    }
}

impl Default for CompatibilityTag {
    fn default() -> Self {
        Self::new("py3", "none", "any")
    }
}

impl fmt::Display for CompatibilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.python, self.abi, self.platform)
    }
}

/// Optional build number segment of the wheel filename
///
/// Installers expect it to start with a digit. That rule is left to the
/// caller; [`BuildTag::is_well_formed`] lets it check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildTag(String);

impl BuildTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the tag starts with an ASCII digit
    pub fn is_well_formed(&self) -> bool {
        self.0.chars().next().is_some_and(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for BuildTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
