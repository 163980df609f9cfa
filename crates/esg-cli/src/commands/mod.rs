//! CLI command implementations.

pub mod analyze;
pub mod compare;
pub mod funds;
pub mod grade;
pub mod screen;
pub mod sector;
pub mod select;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use compare::CompareArgs;
pub use funds::FundsArgs;
pub use grade::GradeArgs;
pub use screen::ScreenArgs;
pub use sector::SectorArgs;
pub use select::SelectArgs;

use esg_engine::{AnalyticsConfig, Grade, Universe};
use esg_engine::selection::SelectionKind;
use esg_ext_file::{create_file_record_source, SessionStore};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::EsgConfig;
use crate::error::{CliError, CliResult};

/// Resolved settings shared by every command.
pub struct Context {
    pub format: OutputFormat,
    pub config: EsgConfig,
}

impl Context {
    /// Builds the context from parsed arguments and the config file.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        Ok(Self {
            format: cli.format,
            config: EsgConfig::resolve(cli)?,
        })
    }

    /// Loads the rated universe from the configured files.
    pub fn universe(&self) -> anyhow::Result<Universe> {
        debug!(
            companies = %self.config.companies_file.display(),
            funds = %self.config.funds_file.display(),
            "Loading universe"
        );
        let source = create_file_record_source(
            &self.config.companies_file,
            &self.config.funds_file,
            self.config.holdings_file.as_deref(),
        )?;
        Ok(Universe::load(&source)?)
    }

    /// The selection session store.
    pub fn session(&self) -> SessionStore {
        SessionStore::new(&self.config.session_file)
    }

    /// Engine-side analytics settings.
    pub fn analytics(&self) -> AnalyticsConfig {
        self.config.analytics()
    }

    /// True when output is a human-readable table.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }
}

/// Validates a score to grade.
pub fn validate_score(score: f64) -> CliResult<f64> {
    if !score.is_finite() {
        return Err(CliError::InvalidScore(score));
    }
    Ok(score)
}

/// Parses a grade label (A+, A, B+, B, C+, C, D).
pub fn parse_grade(s: &str) -> CliResult<Grade> {
    Grade::parse(s).ok_or_else(|| CliError::InvalidGrade(s.to_string()))
}

/// Parses a selection kind. Used as a clap value parser.
pub fn parse_kind(s: &str) -> Result<SelectionKind, String> {
    SelectionKind::parse(s).ok_or_else(|| CliError::InvalidKind(s.to_string()).to_string())
}
