//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    AnalyzeArgs, CompareArgs, FundsArgs, GradeArgs, ScreenArgs, SectorArgs, SelectArgs,
};

/// ESG - Rating aggregation and comparison CLI
#[derive(Parser)]
#[command(name = "esg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML). Ignored if it does not exist.
    #[arg(long, env = "ESG_CONFIG", default_value = "esg.toml", global = true)]
    pub config: PathBuf,

    /// Company ratings CSV (overrides the config file)
    #[arg(long, env = "ESG_COMPANIES", global = true)]
    pub companies: Option<PathBuf>,

    /// Fund ratings CSV (overrides the config file)
    #[arg(long, env = "ESG_FUNDS", global = true)]
    pub funds: Option<PathBuf>,

    /// Fund holdings CSV with `fund_name,isin` rows
    #[arg(long, env = "ESG_HOLDINGS", global = true)]
    pub holdings: Option<PathBuf>,

    /// Selection session file (overrides the config file)
    #[arg(long, env = "ESG_SESSION", global = true)]
    pub session: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Grade a composite score
    Grade(GradeArgs),

    /// Show the grade legend
    Legend,

    /// Summarise a sector (average composite, grade, member count)
    Sector(SectorArgs),

    /// List funds and their allocation-weighted score
    Funds(FundsArgs),

    /// Analyse a fund, company or sector against its peer population
    Analyze(AnalyzeArgs),

    /// Screen companies by name, sector, score, grade and screens
    Screen(ScreenArgs),

    /// Compare companies side by side with best/worst highlighting
    Compare(CompareArgs),

    /// Manage the persisted selection sets
    Select(SelectArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
