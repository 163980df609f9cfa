//! ESG CLI - Command-line interface for ESG rating aggregation.
//!
//! # Usage
//!
//! ```bash
//! # Grade a composite score
//! esg grade 72.5
//!
//! # Analyse a sector against its members
//! esg --companies data/companies.csv analyze --kind sector "Energy Sector"
//!
//! # Screen for compliant utilities
//! esg screen --sector utilities --compliant
//!
//! # Build a comparison watchlist, then compare it
//! esg select add --kind company INE002A01018
//! esg compare
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let context = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Grade(args) => commands::grade::execute(args, &context)?,
        Commands::Legend => commands::grade::legend(&context)?,
        Commands::Sector(args) => commands::sector::execute(args, &context)?,
        Commands::Funds(args) => commands::funds::execute(args, &context)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &context)?,
        Commands::Screen(args) => commands::screen::execute(args, &context)?,
        Commands::Compare(args) => commands::compare::execute(args, &context)?,
        Commands::Select(args) => commands::select::execute(args, &context)?,
    }

    Ok(())
}

/// Logs go to stderr so JSON and CSV output stay machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,esg=info".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
