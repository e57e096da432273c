//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::BuildOptions;

/// wheelsmith - assemble wheel archives from a package tree
#[derive(Parser, Debug)]
#[command(name = "wheelsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a wheel from a build description
    Build {
        /// Path to the build description
        #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Directory source paths are relative to
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Directory the wheel is written to
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Build tag (must start with a digit)
        #[arg(long)]
        build_tag: Option<String>,

        /// Show the normalized path plan without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    /// Overrides carried by a `build` invocation
    pub fn build_options(&self) -> BuildOptions {
        match self {
            Commands::Build {
                base_dir,
                out_dir,
                build_tag,
                dry_run,
                ..
            } => BuildOptions {
                base_dir: base_dir.clone(),
                output_dir: out_dir.clone(),
                build_tag: build_tag.clone(),
                dry_run: *dry_run,
            },
        }
    }
}
