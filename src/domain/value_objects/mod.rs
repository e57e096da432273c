//! Domain Value Objects
//!
//! Immutable value types that represent wheel concepts.

mod category;
mod generator;
mod hash;
mod path;
mod tag;

pub use category::Category;
pub use generator::Generator;
pub use hash::RecordDigest;
pub use path::{escapes_base, normalize_lexically, relative_to, ArchivePath, PathError};
pub use tag::{BuildTag, CompatibilityTag};
