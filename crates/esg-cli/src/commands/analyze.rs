//! Analyze command implementation.
//!
//! Resolves the peer population of a fund, company or sector and prints the
//! aggregate bundle: averages, extremes, sector breakdown and compliance.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use esg_engine::analysis::{analyze, headline, AnalysisResult, AnalysisTarget, Headline};
use esg_engine::analytics::SectorBreakdownEntry;
use esg_engine::selection::SelectionKind;
use esg_engine::Grade;

use crate::cli::OutputFormat;
use crate::commands::sector::SectorRow;
use crate::commands::{parse_kind, Context};
use crate::error::CliError;
use crate::output::{
    print_header, print_json_value, print_metrics, print_output, print_warning, KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// What to analyse: fund, company or sector
    #[arg(short, long, value_parser = parse_kind, default_value = "fund")]
    pub kind: SelectionKind,

    /// Fund name, company ISIN or sector name.
    /// Defaults to the first saved selection of that kind.
    pub key: Option<String>,

    /// Show every sector in the breakdown
    #[arg(long)]
    pub all_sectors: bool,
}

/// JSON shape of an analysis.
#[derive(Debug, Serialize)]
struct AnalysisOutput<'a> {
    target: &'a AnalysisTarget,
    headline: Option<&'a Headline>,
    grade: Grade,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, context: &Context) -> Result<()> {
    let key = match args.key {
        Some(key) => key,
        None => context
            .session()
            .load()
            .set(args.kind)
            .iter()
            .next()
            .map(str::to_string)
            .ok_or_else(|| CliError::MissingArgument(format!("{} key", args.kind)))?,
    };

    let universe = context.universe()?;
    let target = AnalysisTarget::new(args.kind, key);

    let selected = headline(&target, &universe.companies, &universe.funds);
    if selected.is_none() {
        print_warning(&format!("Unknown {} '{}'", target.kind, target.key));
    }

    let mut result = analyze(&target, &universe.companies, &universe.funds, &universe.holdings);
    let top = if args.all_sectors {
        None
    } else {
        context.analytics().top_sectors
    };
    let shown: Vec<SectorBreakdownEntry> = result.top_sectors(top).to_vec();

    match context.format {
        OutputFormat::Json => {
            result.sector_breakdown = shown;
            let output = AnalysisOutput {
                target: &target,
                headline: selected.as_ref(),
                grade: result.grade(),
                result: &result,
            };
            print_json_value(&output)
        }
        OutputFormat::Csv => {
            let rows = summary_rows(&target, selected.as_ref(), &result);
            print_metrics(&rows, context.format)
        }
        OutputFormat::Table => {
            let rows = summary_rows(&target, selected.as_ref(), &result);
            print_header(&format!("{} Analysis", title_case(target.kind.name())));
            print_metrics(&rows, context.format)?;

            if !shown.is_empty() {
                let rows: Vec<SectorRow> = shown.iter().map(SectorRow::from).collect();
                print_header("Sector Breakdown");
                print_output(&rows, context.format)?;
            }
            Ok(())
        }
    }
}

fn summary_rows(
    target: &AnalysisTarget,
    selected: Option<&Headline>,
    result: &AnalysisResult,
) -> Vec<KeyValue> {
    let mut rows = Vec::new();

    match selected {
        Some(h) => {
            rows.push(KeyValue::new("Selected", h.name.clone()));
            rows.push(KeyValue::from_score("Selected Score", h.score));
            rows.push(KeyValue::new("Selected Grade", h.grade.label()));
        }
        None => rows.push(KeyValue::new("Selected", target.key.clone())),
    }

    rows.push(KeyValue::new("Companies", result.total_count.to_string()));
    rows.push(KeyValue::from_score("Average Composite", result.average_composite));
    rows.push(KeyValue::new("Average Grade", result.grade().label()));
    rows.push(KeyValue::from_score("Highest", result.highest));
    rows.push(KeyValue::from_score("Lowest", result.lowest));
    rows.push(KeyValue::new("Best Company", result.best_company.clone()));
    rows.push(KeyValue::new("Worst Company", result.worst_company.clone()));
    rows.push(KeyValue::from_percent("Compliance Rate", result.compliance_rate));
    rows
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
