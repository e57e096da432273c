//! Path mapping normalization
//!
//! Turns producer-supplied entries into `(source, archive)` pairs:
//! - absolute sources are rewritten relative to the base directory
//! - generic files keep their relative source path inside the archive
//! - scripts and includes are flattened to `prefix/basename(destination)`
//!
//! Two entries of one category may not share an archive path.
//!
//! Normalization is idempotent: feeding normalized entries back in yields
//! the same entries.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{PathEntry, RawPathEntry};
use crate::domain::value_objects::{
    escapes_base, normalize_lexically, relative_to, ArchivePath, Category, PathError,
};
use crate::error::{WheelError, WheelResult};

/// Normalizes path mappings against one base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    base_dir: PathBuf,
}

impl PathMapper {
    /// Create a mapper rooted at `base_dir`.
    ///
    /// A relative base directory is anchored at the current directory.
    pub fn new(base_dir: Option<&Path>) -> WheelResult<Self> {
        let base_dir = match base_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Err(WheelError::MissingBaseDir),
        };
        let base_dir = normalize_lexically(&std::path::absolute(base_dir)?);
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Normalize raw entries for `category` into a fresh list.
    ///
    /// The input is never modified.
    pub fn normalize(
        &self,
        category: Category,
        raw: &[RawPathEntry],
    ) -> WheelResult<Vec<PathEntry>> {
        let mut seen = HashSet::with_capacity(raw.len());
        let mut entries = Vec::with_capacity(raw.len());
        for (index, entry) in raw.iter().enumerate() {
            let entry = self.normalize_entry(category, index, entry)?;
            if !seen.insert(entry.archive.clone()) {
                return Err(WheelError::DuplicateArchivePath {
                    category,
                    index,
                    path: entry.archive.to_string(),
                });
            }
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Run already-normalized entries through the mapper again
    pub fn renormalize(
        &self,
        category: Category,
        entries: &[PathEntry],
    ) -> WheelResult<Vec<PathEntry>> {
        let raw: Vec<RawPathEntry> = entries.iter().map(RawPathEntry::from).collect();
        self.normalize(category, &raw)
    }

    fn normalize_entry(
        &self,
        category: Category,
        index: usize,
        entry: &RawPathEntry,
    ) -> WheelResult<PathEntry> {
        let (source, destination) = match entry {
            RawPathEntry::Path(path) => (path.as_path(), path.as_path()),
            RawPathEntry::Seq(parts) if parts.len() == 2 => (parts[0].as_path(), parts[1].as_path()),
            RawPathEntry::Seq(parts) => {
                return Err(WheelError::InvalidPathEntry {
                    category,
                    index,
                    len: parts.len(),
                })
            }
        };

        let source = if source.is_absolute() {
            relative_to(source, &self.base_dir)
        } else {
            normalize_lexically(source)
        };

        let archive = match category.prefix() {
            None => {
                if escapes_base(&source) {
                    return Err(WheelError::PathEscape {
                        path: source,
                        root: self.base_dir.clone(),
                    });
                }
                ArchivePath::new(&source).map_err(|e| invalid_archive_path(&source, e))?
            }
            Some(prefix) => {
                let name = destination.file_name().ok_or_else(|| {
                    invalid_archive_path(destination, PathError::Empty)
                })?;
                let name = name.to_string_lossy();
                ArchivePath::under(prefix, &name)
                    .map_err(|e| invalid_archive_path(destination, e))?
            }
        };

        Ok(PathEntry::new(source, archive))
    }
}

fn invalid_archive_path(path: &Path, err: PathError) -> WheelError {
    WheelError::InvalidArchivePath {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
