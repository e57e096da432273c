//! Category value object - which part of the wheel a path mapping feeds
//!
//! - `Scripts`: flattened under `scripts/`
//! - `Includes`: flattened under `includes/`
//! - `Files`: placed at their relative source path, no prefix

use serde::{Deserialize, Serialize};

/// Path mapping category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scripts,
    Includes,
    Files,
}

impl Category {
    /// Categories in archive write order
    pub const WRITE_ORDER: [Category; 3] = [Category::Scripts, Category::Includes, Category::Files];

    /// Archive subdirectory prefix, `None` for generic files
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Category::Scripts => Some("scripts"),
            Category::Includes => Some("includes"),
            Category::Files => None,
        }
    }

    /// Returns true if entries are flattened to their basename
    pub fn flattens(&self) -> bool {
        self.prefix().is_some()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Scripts => write!(f, "scripts"),
            Category::Includes => write!(f, "includes"),
            Category::Files => write!(f, "files"),
        }
    }
}
