//! Error types for file-backed sources.

use std::path::Path;
use thiserror::Error;

/// Result type for file loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading data files.
///
/// Row-level problems never surface here: invalid rows are logged and
/// skipped. Only unreadable or structurally broken files fail a load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be opened, read or written.
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// The file could not be parsed.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },
}

impl LoadError {
    /// Create an I/O error.
    #[must_use]
    pub fn io(path: &Path, message: impl ToString) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(path: &Path, message: impl ToString) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Maps a csv error to the matching variant.
    #[must_use]
    pub fn from_csv(path: &Path, err: &csv::Error) -> Self {
        if err.is_io_error() {
            Self::io(path, err)
        } else {
            Self::parse(path, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = LoadError::io(Path::new("/tmp/companies.csv"), "permission denied");
        assert!(err.to_string().contains("/tmp/companies.csv"));
        assert!(err.to_string().contains("permission denied"));

        let err = LoadError::parse(Path::new("funds.csv"), "bad header");
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
