//! Local File System Source Tree
//!
//! Implements the SourceTree port with `lstat`, `readlink` and `read`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::ports::{EntryMetadata, SourceEntry, SourceTree};
use crate::error::WheelResult;

/// Source tree backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSourceTree;

impl LocalSourceTree {
    /// Create a new LocalSourceTree instance
    pub fn new() -> Self {
        Self
    }
}

impl SourceTree for LocalSourceTree {
    fn read_entry(&self, path: &Path) -> WheelResult<Option<SourceEntry>> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let meta = EntryMetadata {
            modified: metadata.modified().ok(),
            mode: permission_bits(&metadata),
        };

        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            let target = fs::read_link(path)?;
            Ok(Some(SourceEntry::Symlink {
                target: target.to_string_lossy().into_owned(),
                meta,
            }))
        } else if file_type.is_file() {
            let contents = fs::read(path)?;
            Ok(Some(SourceEntry::File { contents, meta }))
        } else {
            Ok(None)
        }
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &fs::Metadata) -> u32 {
    crate::domain::ports::GENERATED_MODE
}
