//! Error types for wheelsmith
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Category;

/// Result type alias for wheelsmith operations
pub type WheelResult<T> = Result<T, WheelError>;

/// Main error type for wheel assembly
#[derive(Error, Debug)]
pub enum WheelError {
    /// Path mappings were set without a base directory
    #[error("a base directory is required to normalize path mappings")]
    MissingBaseDir,

    /// A raw path mapping element had the wrong shape
    #[error("{category} entry #{index} must be a path or a [source, destination] pair (got {len} elements)")]
    InvalidPathEntry {
        category: Category,
        index: usize,
        len: usize,
    },

    /// Two entries would land on the same archive path
    #[error("{category} entry #{index} maps to '{path}', which is already taken by another entry")]
    DuplicateArchivePath {
        category: Category,
        index: usize,
        path: String,
    },

    /// Source path escapes the base directory
    #[error("path '{path}' escapes base directory '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Archive path failed validation
    #[error("invalid archive path '{path}': {reason}")]
    InvalidArchivePath { path: String, reason: String },

    /// Base directory changed without renormalizing path mappings
    #[error("base directory changed since path mappings were set; call renormalize() first")]
    StalePathMappings,

    /// Invalid build description
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Zip container error
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_path_entry() {
        let err = WheelError::InvalidPathEntry {
            category: Category::Scripts,
            index: 2,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "scripts entry #2 must be a path or a [source, destination] pair (got 3 elements)"
        );
    }

    #[test]
    fn test_error_display_duplicate_archive_path() {
        let err = WheelError::DuplicateArchivePath {
            category: Category::Scripts,
            index: 1,
            path: "scripts/tool".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "scripts entry #1 maps to 'scripts/tool', which is already taken by another entry"
        );
    }

    #[test]
    fn test_error_display_path_escape() {
        let err = WheelError::PathEscape {
            path: PathBuf::from("../secret.txt"),
            root: PathBuf::from("/pkg"),
        };
        assert_eq!(
            err.to_string(),
            "path '../secret.txt' escapes base directory '/pkg'"
        );
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let err: WheelError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        match err {
            WheelError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other}"),
        }
    }
}
