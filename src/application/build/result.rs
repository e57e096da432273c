//! Build Result
//!
//! Summary of one completed `write()`.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::ManifestRecord;
use crate::domain::value_objects::Category;

/// Entries written per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub scripts: usize,
    pub includes: usize,
    pub files: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Scripts => self.scripts,
            Category::Includes => self.includes,
            Category::Files => self.files,
        }
    }

    pub(crate) fn bump(&mut self, category: Category) {
        match category {
            Category::Scripts => self.scripts += 1,
            Category::Includes => self.includes += 1,
            Category::Files => self.files += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.scripts + self.includes + self.files
    }
}

/// Result of a build
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    /// Wheel filename
    pub filename: String,
    /// Where the archive was written, when written to disk
    pub output: Option<PathBuf>,
    /// Entries written per category
    pub written: CategoryCounts,
    /// Source paths skipped because they were absent or not files
    pub skipped: Vec<PathBuf>,
    /// Manifest rows in append order (RECORD placeholder first)
    pub records: Vec<ManifestRecord>,
}

impl BuildSummary {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            output: None,
            written: CategoryCounts::default(),
            skipped: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Number of archive entries, RECORD included
    pub fn entry_count(&self) -> usize {
        self.records.len()
    }
}
