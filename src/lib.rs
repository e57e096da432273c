//! wheelsmith - wheel archive assembly
//!
//! Models a distributable wheel in memory, normalizes the path mappings that
//! populate it, and writes a single zip archive whose final `RECORD` entry
//! lists a `sha256=` digest and size for every entry written before it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildSummary, WheelBuilder};
pub use config::Config;
pub use domain::entities::{Manifest, ManifestRecord, PackageIdentity, PathEntry, RawPathEntry};
pub use domain::services::PathMapper;
pub use domain::value_objects::{ArchivePath, Category, Generator, RecordDigest};
pub use error::{WheelError, WheelResult};
