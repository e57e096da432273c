//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{WheelError, WheelResult};

use super::types::Config;

/// Default build description file name
pub const DEFAULT_CONFIG_FILE: &str = "wheel.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load, anchor and validate a build description, dropping warnings
    pub fn load(path: &Path) -> WheelResult<Config> {
        let (config, _) = load_with_warnings(path)?;
        config.validate(path)?;
        Ok(config)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative directories in the file are anchored at the file's directory.
pub fn load_with_warnings(path: &Path) -> WheelResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WheelError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = config.resolve_relative_to(dir);
    debug!(file = %path.display(), "loaded build description");

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (WHEELSMITH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(tag) = lookup("WHEELSMITH_BUILD_TAG") {
        config.package.build_tag = if tag.is_empty() { None } else { Some(tag) };
    }

    if let Some(platform) = lookup("WHEELSMITH_PLATFORM_TAG").filter(|v| !v.is_empty()) {
        config.package.platform_tag = platform;
    }

    if let Some(dir) = lookup("WHEELSMITH_OUTPUT_DIR").filter(|v| !v.is_empty()) {
        config.output.dir = Some(PathBuf::from(dir));
    }

    if let Some(dir) = lookup("WHEELSMITH_BASE_DIR").filter(|v| !v.is_empty()) {
        config.paths.base_dir = Some(PathBuf::from(dir));
    }

    config
}

/// 1-based line of the first occurrence of `needle`
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Keys accepted anywhere in `wheel.toml`
const KNOWN_KEYS: &[&str] = &[
    "package",
    "name",
    "version",
    "build_tag",
    "python_tag",
    "abi_tag",
    "platform_tag",
    "noarch",
    "summary",
    "license",
    "requires_python",
    "requires_dist",
    "paths",
    "base_dir",
    "scripts",
    "includes",
    "files",
    "output",
    "dir",
];

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|key| (*key, edit_distance(unknown, key)))
        .min_by_key(|&(_, distance)| distance)
        .filter(|&(_, distance)| distance <= 2)
        .map(|(key, _)| key.to_string())
}

/// Levenshtein distance over chars, keeping a single row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}
