//! Domain Services
//!
//! Pure logic over the domain entities; no archive I/O.

mod metadata;
mod path_mapper;

pub use metadata::{render_metadata, render_wheel, METADATA_VERSION, WHEEL_VERSION};
pub use path_mapper::PathMapper;
