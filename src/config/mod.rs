//! Configuration module for wheelsmith
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WHEELSMITH_*)
//! 3. Build description (`wheel.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_with_warnings, with_env_overrides, ConfigWarning, DEFAULT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, PackageConfig, PathsConfig};
