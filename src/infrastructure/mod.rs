//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source tree reading (local disk)
//! - `archive/` - Output containers (zip)

pub mod archive;
pub mod fs;

pub use archive::ZipSink;
pub use fs::LocalSourceTree;
