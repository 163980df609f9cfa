//! Funds command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use esg_engine::analytics::{fund_aum_covered, fund_weighted_score_with};
use esg_engine::selection::SelectionKind;
use esg_engine::{grade_of, FundRecord, FundWeighting, Grade};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{
    format_percent, format_score, print_header, print_info, print_output, print_warning,
};

/// Arguments for the funds command.
#[derive(Args, Debug)]
pub struct FundsArgs {
    /// Fund names to include. All funds if omitted.
    pub names: Vec<String>,

    /// Use the funds in the saved selection
    #[arg(long, conflicts_with = "names")]
    pub selected: bool,

    /// Weight every fund equally instead of by allocation
    #[arg(long)]
    pub equal: bool,
}

/// One fund row.
#[derive(Debug, Serialize, Tabled)]
struct FundRow {
    #[tabled(rename = "Fund")]
    fund: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Allocation")]
    allocation: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

impl From<&FundRecord> for FundRow {
    fn from(fund: &FundRecord) -> Self {
        let allocation = if fund.allocation.is_missing() {
            "-".to_string()
        } else {
            format_percent(fund.allocation_pct())
        };
        Self {
            fund: fund.fund_name.clone(),
            score: format_score(fund.score),
            allocation,
            grade: fund.grade().label().to_string(),
        }
    }
}

/// Weighted score over the listed funds, for JSON output.
#[derive(Debug, Serialize)]
struct FundsOutput<'a> {
    funds: &'a [FundRecord],
    weighting: FundWeighting,
    weighted_score: f64,
    grade: Grade,
    aum_covered: f64,
}

/// Execute the funds command.
pub fn execute(args: FundsArgs, context: &Context) -> Result<()> {
    let universe = context.universe()?;

    let wanted: Vec<String> = if args.selected {
        context
            .session()
            .load()
            .set(SelectionKind::Fund)
            .iter()
            .map(str::to_string)
            .collect()
    } else {
        args.names
    };

    let funds: Vec<FundRecord> = if wanted.is_empty() && !args.selected {
        universe.funds.clone()
    } else {
        wanted
            .iter()
            .filter_map(|name| {
                let fund = universe.fund(name.trim());
                if fund.is_none() {
                    print_warning(&format!("Unknown fund '{}'", name));
                }
                fund.cloned()
            })
            .collect()
    };

    let weighting = if args.equal {
        FundWeighting::Equal
    } else {
        context.analytics().fund_weighting
    };
    let weighted = fund_weighted_score_with(&funds, weighting);
    let aum_covered = fund_aum_covered(&funds);

    match context.format {
        OutputFormat::Json => {
            let output = FundsOutput {
                funds: &funds,
                weighting,
                weighted_score: weighted,
                grade: grade_of(weighted),
                aum_covered,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<FundRow> = funds.iter().map(FundRow::from).collect();
            print_output(&rows, context.format)?;
        }
        OutputFormat::Table => {
            let rows: Vec<FundRow> = funds.iter().map(FundRow::from).collect();
            print_header("Funds");
            print_output(&rows, context.format)?;
            print_info(&format!(
                "{} score: {} ({})",
                weighting,
                format_score(weighted),
                grade_of(weighted)
            ));
            print_info(&format!("AUM covered: {}", format_percent(aum_covered)));
        }
    }

    Ok(())
}
