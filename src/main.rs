//! wheelsmith CLI - assemble wheel archives from a package tree
//!
//! Usage: wheelsmith build [--config wheel.toml] [--dry-run] [--json]

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use wheelsmith::application::{BuildOptions, WheelBuilder};
use wheelsmith::config::{load_with_warnings, with_env_overrides};
use wheelsmith::domain::value_objects::Generator;
use wheelsmith::presentation::{
    render_config_warnings, render_plan, render_summary, Cli, Commands, OutputFormat,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let options = cli.command.build_options();
    match &cli.command {
        Commands::Build { config, .. } => cmd_build(config, &options, format),
    }
}

/// `RUST_LOG` wins; otherwise `-v` → debug, `-vv` → trace
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,wheelsmith=debug",
        _ => "warn,wheelsmith=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn cmd_build(config_path: &Path, options: &BuildOptions, format: OutputFormat) -> Result<()> {
    let (config, warnings) = load_with_warnings(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    for line in render_config_warnings(&warnings) {
        warn!("{}", line);
    }

    let config = options.apply(with_env_overrides(config));
    config.validate(config_path)?;

    let builder = WheelBuilder::from_config(&config, Generator::this_crate())
        .context("failed to normalize path mappings")?;

    if options.dry_run {
        println!("{}", render_plan(&builder, format).trim_end());
        return Ok(());
    }

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let output = builder.output_path();
    let summary = builder
        .write()
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{}", render_summary(&summary, format).trim_end());
    Ok(())
}
