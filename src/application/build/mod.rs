//! Build Module
//!
//! Turns a package identity and its path mappings into a wheel archive.
//!
//! ## Structure
//!
//! - `options` - Command-line overrides (`BuildOptions`)
//! - `result` - Result types (`BuildSummary`)
//! - `session` - Ordered write stages of a single build pass
//! - `use_case` - `WheelBuilder`
//!
//! ## Usage
//!
//! ```ignore
//! use wheelsmith::application::build::WheelBuilder;
//!
//! let mut builder = WheelBuilder::new(PackageIdentity::new("demo", "1.0"), Generator::this_crate())?;
//! builder.set_base_dir("pkg")?;
//! builder.set_files(["README.md"])?;
//! let summary = builder.write()?;
//! ```

mod options;
mod result;
mod session;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildSummary, CategoryCounts};
pub use use_case::WheelBuilder;
