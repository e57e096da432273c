//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{render_config_warnings, render_plan, render_summary, OutputFormat};
