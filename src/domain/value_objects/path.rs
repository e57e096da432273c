//! Archive Path Value Object
//!
//! A validated path inside the wheel archive:
//! - Always relative (no root, no drive prefix)
//! - No traversal components (..)
//! - Forward slashes, whatever the host separator

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// Error when archive path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => write!(f, "path contains traversal components (..)"),
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated, slash-separated path of an archive entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Create a new ArchivePath after validation
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();
        let mut parts: Vec<String> = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        if parts.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(parts.join("/")))
    }

    /// Join a prefix directory and a single file name
    pub fn under(prefix: &str, name: &str) -> Result<Self, PathError> {
        Self::new(Path::new(prefix).join(name))
    }

    /// Get the archive path string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ArchivePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// Leading `..` components of a relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Express `path` relative to `base`, both absolute.
///
/// Mirrors `os.path.relpath`: walks up with `..` when `path` is not
/// below `base`. Returns `.` when they are equal.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize_lexically(path);
    let base = normalize_lexically(base);

    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Returns true if a relative path climbs out of its base
pub fn escapes_base(rel: &Path) -> bool {
    matches!(rel.components().next(), Some(Component::ParentDir))
}
