//! SourceTree port - read access to the files being packaged
//!
//! Implementations:
//! - `LocalSourceTree` - the local filesystem (lstat / readlink / read)
//! - `MemoryTree` - in-memory map for tests

use std::path::Path;

use super::archive_sink::EntryMetadata;
use crate::error::WheelResult;

/// What a source path refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEntry {
    /// Regular file with its full contents
    File {
        contents: Vec<u8>,
        meta: EntryMetadata,
    },
    /// Symbolic link with its target string
    Symlink { target: String, meta: EntryMetadata },
}

impl SourceEntry {
    /// Bytes that go into the archive and the manifest digest
    pub fn payload(&self) -> &[u8] {
        match self {
            SourceEntry::File { contents, .. } => contents,
            SourceEntry::Symlink { target, .. } => target.as_bytes(),
        }
    }

    pub fn meta(&self) -> &EntryMetadata {
        match self {
            SourceEntry::File { meta, .. } | SourceEntry::Symlink { meta, .. } => meta,
        }
    }

    pub fn is_symlink(&self) -> bool {
        matches!(self, SourceEntry::Symlink { .. })
    }
}

/// Read-only view of the package tree
pub trait SourceTree {
    /// Read the entry at `path` without following a final symlink.
    ///
    /// Returns `Ok(None)` when the path does not exist or is neither a
    /// regular file nor a symlink.
    fn read_entry(&self, path: &Path) -> WheelResult<Option<SourceEntry>>;
}
