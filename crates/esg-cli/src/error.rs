//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Score that cannot be graded.
    #[error("Invalid score: {0}. Must be a finite number.")]
    InvalidScore(f64),

    /// Grade label that is not on the scale.
    #[error("Invalid grade: {0}. Use one of A+, A, B+, B, C+, C, D.")]
    InvalidGrade(String),

    /// Selection kind that is not fund, company or sector.
    #[error("Invalid selection kind: {0}. Use fund, company or sector.")]
    InvalidKind(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
