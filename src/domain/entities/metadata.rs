//! Optional core-metadata fields rendered into METADATA

use serde::{Deserialize, Serialize};

/// Extra METADATA fields beyond name and version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub requires_python: Option<String>,
    #[serde(default)]
    pub requires_dist: Vec<String>,
}
