//! ArchiveSink port - the output container a wheel is streamed into
//!
//! Implementations:
//! - `ZipSink` - deflate-compressed zip file
//! - an in-memory recorder in the build tests

use std::time::SystemTime;

use crate::domain::value_objects::ArchivePath;
use crate::error::WheelResult;

/// Permission bits applied to generated entries
pub const GENERATED_MODE: u32 = 0o644;

/// Unix `S_IFLNK` file type bits
pub const S_IFLNK: u32 = 0o120000;

/// Permission bits stored for symlink entries
pub const SYMLINK_MODE: u32 = 0o755;

/// External attributes of a symlink entry: `(S_IFLNK | 0o755) << 16`
pub const SYMLINK_EXTERNAL_ATTR: u32 = 0xA1ED_0000;

/// Filesystem metadata carried onto an archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Last modification time, if known
    pub modified: Option<SystemTime>,
    /// Permission bits (lower 12 bits of the unix mode)
    pub mode: u32,
}

impl EntryMetadata {
    /// Metadata for an entry generated during the build
    pub fn generated() -> Self {
        Self {
            modified: Some(SystemTime::now()),
            mode: GENERATED_MODE,
        }
    }
}

/// Output container accepting entries in write order
pub trait ArchiveSink {
    /// Add a regular file entry
    fn add_file(
        &mut self,
        path: &ArchivePath,
        payload: &[u8],
        meta: &EntryMetadata,
    ) -> WheelResult<()>;

    /// Add a symlink entry whose payload is the link target
    fn add_symlink(
        &mut self,
        path: &ArchivePath,
        target: &str,
        meta: &EntryMetadata,
    ) -> WheelResult<()>;

    /// Flush and close the container
    fn finish(self) -> WheelResult<()>
    where
        Self: Sized;
}
