//! Domain Entities
//!
//! - `PackageIdentity` - name, version and tags of a wheel
//! - `PathEntry` / `RawPathEntry` - path mappings before and after normalization
//! - `Manifest` - the RECORD rows accumulated while writing

mod identity;
mod manifest;
mod metadata;
mod path_entry;

pub use identity::{PackageIdentity, WHEEL_EXTENSION};
pub use manifest::{Manifest, ManifestRecord};
pub use metadata::PackageMetadata;
pub use path_entry::{PathEntry, RawPathEntry};
