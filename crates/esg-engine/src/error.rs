//! Error types for the ESG engine.
//!
//! Aggregation, statistics and selection functions are total and never
//! return errors. Errors only arise when constructing records at the
//! data-source boundary, before they ever reach the engine.

use thiserror::Error;

/// Result type for ESG engine operations.
pub type EsgResult<T> = Result<T, EsgError>;

/// Errors that can occur while building engine records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EsgError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A score fell outside the accepted [0, 100] range.
    #[error("Score '{field}' for '{id}' out of range: {value}")]
    ScoreOutOfRange {
        /// Identifier of the record (ISIN or fund name).
        id: String,
        /// The score field name.
        field: String,
        /// The offending value.
        value: String,
    },

    /// Record failed validation for another reason.
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord {
        /// Identifier of the record.
        id: String,
        /// The reason the record is invalid.
        reason: String,
    },
}

impl EsgError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a score out of range error.
    #[must_use]
    pub fn score_out_of_range(id: impl Into<String>, field: impl Into<String>, value: f64) -> Self {
        Self::ScoreOutOfRange {
            id: id.into(),
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EsgError::missing_field("isin");
        assert!(err.to_string().contains("isin"));

        let err = EsgError::score_out_of_range("IN0001", "composite", 120.0);
        assert!(err.to_string().contains("IN0001"));
        assert!(err.to_string().contains("composite"));
        assert!(err.to_string().contains("120"));

        let err = EsgError::invalid_record("Alpha", "empty fund name");
        assert!(err.to_string().contains("empty fund name"));
    }

    #[test]
    fn test_error_clone() {
        let err = EsgError::missing_field("sector");
        assert_eq!(err.clone(), err);
    }
}
