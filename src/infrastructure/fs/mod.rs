//! File System Implementations
//!
//! Concrete implementations of the SourceTree port.

mod local;

pub use local::LocalSourceTree;
