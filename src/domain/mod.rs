//! Domain Layer
//!
//! The wheel model: identity, path mappings, manifest and metadata rendering.
//!
//! ## Structure
//!
//! - `entities/` - PackageIdentity, PathEntry, Manifest
//! - `value_objects/` - ArchivePath, RecordDigest, Category, tags
//! - `services/` - PathMapper, METADATA/WHEEL rendering
//! - `ports/` - ArchiveSink and SourceTree seams for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
