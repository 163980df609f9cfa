//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use esg_engine::types::{AnalyticsConfig, FundWeighting, DEFAULT_TOP_SECTORS};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// CLI configuration, read from `esg.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgConfig {
    /// Company ratings CSV
    #[serde(default = "default_companies_file")]
    pub companies_file: PathBuf,

    /// Fund ratings CSV
    #[serde(default = "default_funds_file")]
    pub funds_file: PathBuf,

    /// Fund holdings CSV
    pub holdings_file: Option<PathBuf>,

    /// Selection session JSON
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,

    /// Sectors shown in an analysis breakdown
    #[serde(default = "default_top_sectors")]
    pub top_sectors: usize,

    /// Fund weighting method
    #[serde(default)]
    pub weighting: FundWeighting,
}

fn default_companies_file() -> PathBuf {
    PathBuf::from("data/companies.csv")
}

fn default_funds_file() -> PathBuf {
    PathBuf::from("data/funds.csv")
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".esg-session.json")
}

fn default_top_sectors() -> usize {
    DEFAULT_TOP_SECTORS
}

impl Default for EsgConfig {
    fn default() -> Self {
        Self {
            companies_file: default_companies_file(),
            funds_file: default_funds_file(),
            holdings_file: None,
            session_file: default_session_file(),
            top_sectors: default_top_sectors(),
            weighting: FundWeighting::default(),
        }
    }
}

impl EsgConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads the file if present, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            info!("Loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Resolves the configuration for a command line. Flags win over the file.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = Self::load_or_default(&cli.config)?;
        if let Some(path) = &cli.companies {
            config.companies_file = path.clone();
        }
        if let Some(path) = &cli.funds {
            config.funds_file = path.clone();
        }
        if let Some(path) = &cli.holdings {
            config.holdings_file = Some(path.clone());
        }
        if let Some(path) = &cli.session {
            config.session_file = path.clone();
        }
        Ok(config)
    }

    /// Engine-side analytics settings.
    pub fn analytics(&self) -> AnalyticsConfig {
        AnalyticsConfig::new()
            .with_top_sectors(self.top_sectors)
            .with_fund_weighting(self.weighting)
    }
}
