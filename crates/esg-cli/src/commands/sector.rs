//! Sector command implementation.
//!
//! Summarises one sector, or every sector when no name is given.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use esg_engine::analysis::{canonical_sector, sector_members};
use esg_engine::analytics::{sector_breakdown, sector_summary, SectorBreakdownEntry};

use crate::commands::Context;
use crate::output::{
    format_score, print_header, print_metrics, print_output, print_warning, KeyValue,
};

/// Arguments for the sector command.
#[derive(Args, Debug)]
pub struct SectorArgs {
    /// Sector name (case-insensitive, "Energy Sector" matches "Energy").
    /// Omit to list every sector.
    pub name: Option<String>,
}

/// One sector row of the overview table.
#[derive(Debug, Serialize, Tabled)]
pub struct SectorRow {
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Companies")]
    pub count: usize,
    #[tabled(rename = "Avg Composite")]
    pub avg_composite: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
    #[tabled(rename = "Best Company")]
    pub best_company: String,
}

impl From<&SectorBreakdownEntry> for SectorRow {
    fn from(entry: &SectorBreakdownEntry) -> Self {
        Self {
            sector: entry.sector.clone(),
            count: entry.count,
            avg_composite: format_score(entry.avg_composite),
            grade: entry.grade().label().to_string(),
            best_company: entry.best_company.clone(),
        }
    }
}

/// Execute the sector command.
pub fn execute(args: SectorArgs, context: &Context) -> Result<()> {
    let universe = context.universe()?;

    let Some(name) = args.name else {
        let rows: Vec<SectorRow> = sector_breakdown(&universe.companies)
            .iter()
            .map(SectorRow::from)
            .collect();
        if context.is_table() {
            print_header("Sectors");
        }
        return print_output(&rows, context.format);
    };

    let label = match canonical_sector(&universe.companies, &name) {
        Some(label) => label.to_string(),
        None => {
            print_warning(&format!("No companies in sector '{}'", name.trim()));
            name.trim().to_string()
        }
    };
    let summary = sector_summary(sector_members(&universe.companies, &name));

    let results = vec![
        KeyValue::new("Sector", label),
        KeyValue::new("Companies", summary.count.to_string()),
        KeyValue::from_score("Average Composite", summary.avg_composite),
        KeyValue::new("Grade", summary.grade.label()),
        KeyValue::new("Category", summary.grade.category()),
    ];

    if context.is_table() {
        print_header("Sector Summary");
    }
    print_metrics(&results, context.format)
}
