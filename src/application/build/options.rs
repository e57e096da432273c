//! Build Options
//!
//! Command-line overrides applied on top of a loaded build description.

use std::path::PathBuf;

use crate::config::Config;

/// Overrides for a build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Base directory override
    pub base_dir: Option<PathBuf>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
    /// Build tag override
    pub build_tag: Option<String>,
    /// Plan only; write nothing
    pub dry_run: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_build_tag(mut self, tag: impl Into<String>) -> Self {
        self.build_tag = Some(tag.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Apply the overrides that are set
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.base_dir {
            config.paths.base_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = Some(dir.clone());
        }
        if let Some(tag) = &self.build_tag {
            config.package.build_tag = Some(tag.clone());
        }
        config
    }
}
