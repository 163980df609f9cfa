//! Compare command implementation.
//!
//! Side-by-side table of the selected companies. The best value in each
//! column is marked ▲ and the worst ▼; a column where every company scores
//! the same has no marks.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use esg_engine::analysis::{compare_with, ComparisonTable};
use esg_engine::analytics::company_aum_covered;
use esg_engine::selection::{SelectionKind, SelectionSet};
use esg_engine::types::columns::{
    COMPANY_COLUMNS, COMPOSITE, ESG_SCORE, E_SCORE, G_SCORE, S_SCORE,
};
use esg_engine::CompanyRecord;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{
    format_marked, format_percent, print_header, print_info, print_json_value, print_output,
    print_warning,
};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// ISINs to compare. Defaults to the saved company selection.
    pub isins: Vec<String>,

    /// Only highlight these columns (composite, esg_score, e_score, s_score, g_score)
    #[arg(long = "highlight", value_name = "COLUMN")]
    pub highlight: Vec<String>,
}

/// One compared company.
#[derive(Debug, Serialize, Tabled)]
struct CompareRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Composite")]
    composite: String,
    #[tabled(rename = "ESG")]
    esg_score: String,
    #[tabled(rename = "E")]
    e_score: String,
    #[tabled(rename = "S")]
    s_score: String,
    #[tabled(rename = "G")]
    g_score: String,
}

/// JSON shape of a comparison.
#[derive(Debug, Serialize)]
struct CompareOutput<'a> {
    companies: Vec<&'a str>,
    aum_covered: f64,
    #[serde(flatten)]
    table: &'a ComparisonTable,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, context: &Context) -> Result<()> {
    let isins: SelectionSet = if args.isins.is_empty() {
        context.session().load().set(SelectionKind::Company).clone()
    } else {
        args.isins.iter().map(|isin| isin.trim().to_string()).collect()
    };
    if isins.is_empty() {
        return Err(CliError::MissingArgument("ISINs (or a saved company selection)".into()).into());
    }

    let universe = context.universe()?;
    let companies: Vec<&CompanyRecord> = isins
        .iter()
        .filter_map(|isin| {
            let company = universe.company(isin);
            if company.is_none() {
                print_warning(&format!("Unknown ISIN '{}'", isin));
            }
            company
        })
        .collect();

    let mut config = context.analytics();
    if !args.highlight.is_empty() {
        config = config.with_highlight_columns(args.highlight);
    }
    let table = compare_with(&companies, &COMPANY_COLUMNS, &config);

    match context.format {
        OutputFormat::Json => {
            let output = CompareOutput {
                companies: companies.iter().map(|c| c.company_name.as_str()).collect(),
                aum_covered: company_aum_covered(companies.len()),
                table: &table,
            };
            print_json_value(&output)
        }
        OutputFormat::Csv | OutputFormat::Table => {
            let rows = comparison_rows(&companies, &table);
            if !context.is_table() {
                return print_output(&rows, context.format);
            }
            print_header("Company Comparison");
            print_output(&rows, context.format)?;
            print_info(&format!(
                "AUM covered: {} (equal split)",
                format_percent(company_aum_covered(companies.len()))
            ));
            Ok(())
        }
    }
}

fn comparison_rows(companies: &[&CompanyRecord], table: &ComparisonTable) -> Vec<CompareRow> {
    let marked = |row: usize, column: &str| {
        table
            .cell(row, column)
            .map_or_else(|| "-".to_string(), |cell| format_marked(cell.value, cell.class))
    };

    companies
        .iter()
        .enumerate()
        .map(|(i, company)| CompareRow {
            company: company.company_name.clone(),
            composite: marked(i, COMPOSITE),
            esg_score: marked(i, ESG_SCORE),
            e_score: marked(i, E_SCORE),
            s_score: marked(i, S_SCORE),
            g_score: marked(i, G_SCORE),
        })
        .collect()
}
