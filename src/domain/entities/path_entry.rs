//! Path mapping entries
//!
//! Raw entries come from producers (config files, package scanners) and may
//! be a bare path or a `[source, destination]` pair. Normalized entries pair
//! a base-relative source path with a validated archive path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ArchivePath;

/// Unnormalized path mapping element
///
/// `Seq` holds whatever list the producer supplied; only two-element lists
/// are valid and the mapper reports any other length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPathEntry {
    Path(PathBuf),
    Seq(Vec<PathBuf>),
}

impl RawPathEntry {
    pub fn bare(path: impl Into<PathBuf>) -> Self {
        RawPathEntry::Path(path.into())
    }

    pub fn pair(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        RawPathEntry::Seq(vec![source.into(), destination.into()])
    }
}

impl From<&str> for RawPathEntry {
    fn from(path: &str) -> Self {
        RawPathEntry::bare(path)
    }
}

impl From<(&str, &str)> for RawPathEntry {
    fn from((source, destination): (&str, &str)) -> Self {
        RawPathEntry::pair(source, destination)
    }
}

impl From<&PathEntry> for RawPathEntry {
    fn from(entry: &PathEntry) -> Self {
        RawPathEntry::pair(&entry.source, entry.archive.as_str())
    }
}

/// Normalized (source, archive) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Source path relative to the base directory
    pub source: PathBuf,
    /// Destination inside the archive
    pub archive: ArchivePath,
}

impl PathEntry {
    pub fn new(source: impl Into<PathBuf>, archive: ArchivePath) -> Self {
        Self {
            source: source.into(),
            archive,
        }
    }

    /// Absolute source location under `base_dir`
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.source)
    }
}
