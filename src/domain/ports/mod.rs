//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_sink;
pub mod source_tree;

pub use archive_sink::{
    ArchiveSink, EntryMetadata, GENERATED_MODE, SYMLINK_EXTERNAL_ATTR, SYMLINK_MODE, S_IFLNK,
};
pub use source_tree::{SourceEntry, SourceTree};
