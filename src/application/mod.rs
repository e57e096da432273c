//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WheelBuilder` - Normalizes path mappings and writes the archive

pub mod build;

pub use build::{BuildOptions, BuildSummary, CategoryCounts, WheelBuilder};
