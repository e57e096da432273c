//! Configuration types
//!
//! The build description (`wheel.toml`) names the package, its tags and the
//! three path-mapping lists.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PackageIdentity, PackageMetadata, RawPathEntry};
use crate::domain::value_objects::{BuildTag, Category, CompatibilityTag};
use crate::error::{WheelError, WheelResult};

/// `[package]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub build_tag: Option<String>,

    #[serde(default = "default_python_tag")]
    pub python_tag: String,

    #[serde(default = "default_abi_tag")]
    pub abi_tag: String,

    #[serde(default = "default_platform_tag")]
    pub platform_tag: String,

    /// Platform-independent package (`Root-Is-Purelib: true`)
    #[serde(default)]
    pub noarch: bool,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub requires_python: Option<String>,

    #[serde(default)]
    pub requires_dist: Vec<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            build_tag: None,
            python_tag: default_python_tag(),
            abi_tag: default_abi_tag(),
            platform_tag: default_platform_tag(),
            noarch: false,
            summary: None,
            license: None,
            requires_python: None,
            requires_dist: Vec::new(),
        }
    }
}

fn default_python_tag() -> String {
    "py3".to_string()
}

fn default_abi_tag() -> String {
    "none".to_string()
}

fn default_platform_tag() -> String {
    "any".to_string()
}

/// `[paths]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    #[serde(default)]
    pub scripts: Vec<RawPathEntry>,

    #[serde(default)]
    pub includes: Vec<RawPathEntry>,

    #[serde(default)]
    pub files: Vec<RawPathEntry>,
}

impl PathsConfig {
    pub fn entries(&self, category: Category) -> &[RawPathEntry] {
        match category {
            Category::Scripts => &self.scripts,
            Category::Includes => &self.includes,
            Category::Files => &self.files,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Anchor relative directories at `dir` (the config file's directory)
    pub fn resolve_relative_to(mut self, dir: &Path) -> Self {
        if let Some(base) = self.paths.base_dir.take() {
            self.paths.base_dir = Some(anchor(dir, base));
        }
        self.output.dir = Some(match self.output.dir.take() {
            Some(out) => anchor(dir, out),
            None => dir.to_path_buf(),
        });
        self
    }

    /// Check required fields; `file` names the source in errors
    pub fn validate(&self, file: &Path) -> WheelResult<()> {
        let fail = |message: String| WheelError::Config {
            file: file.to_path_buf(),
            message,
        };

        if self.package.name.trim().is_empty() {
            return Err(fail("package.name is required".to_string()));
        }
        if self.package.version.trim().is_empty() {
            return Err(fail("package.version is required".to_string()));
        }
        if let Some(tag) = &self.package.build_tag {
            if !BuildTag::new(tag.as_str()).is_well_formed() {
                return Err(fail(format!(
                    "package.build_tag '{}' must start with a digit",
                    tag
                )));
            }
        }
        Ok(())
    }

    pub fn identity(&self) -> PackageIdentity {
        let package = &self.package;
        let identity = PackageIdentity::new(&package.name, &package.version).with_tag(
            CompatibilityTag::new(&package.python_tag, &package.abi_tag, &package.platform_tag),
        );
        match &package.build_tag {
            Some(tag) => identity.with_build_tag(tag.as_str()),
            None => identity,
        }
    }

    pub fn metadata(&self) -> PackageMetadata {
        PackageMetadata {
            summary: self.package.summary.clone(),
            license: self.package.license.clone(),
            requires_python: self.package.requires_python.clone(),
            requires_dist: self.package.requires_dist.clone(),
        }
    }

    /// Output directory, defaulting to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn anchor(dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        dir.join(path)
    }
}
