//! Screen command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use esg_engine::analytics::compliance_rate;
use esg_engine::screening::CompanyFilter;
use esg_engine::CompanyRecord;

use crate::cli::OutputFormat;
use crate::commands::{parse_grade, Context};
use crate::output::{format_percent, format_score, print_header, print_info, print_output};

/// Arguments for the screen command.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Substring of the company name or ISIN
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sector name
    #[arg(short, long)]
    pub sector: Option<String>,

    /// Minimum composite score
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum composite score
    #[arg(long)]
    pub max: Option<f64>,

    /// Exact grade (A+, A, B+, B, C+, C, D)
    #[arg(short, long)]
    pub grade: Option<String>,

    /// Positive screen label
    #[arg(long)]
    pub positive: Option<String>,

    /// Negative screen label
    #[arg(long)]
    pub negative: Option<String>,

    /// Only companies passing screening
    #[arg(long)]
    pub compliant: bool,
}

impl ScreenArgs {
    fn to_filter(&self) -> Result<CompanyFilter> {
        let mut filter = CompanyFilter::new();
        if let Some(query) = &self.query {
            filter = filter.with_query(query.as_str());
        }
        if let Some(sector) = &self.sector {
            filter = filter.with_sector(sector.as_str());
        }
        if let Some(min) = self.min {
            filter = filter.with_min_composite(min);
        }
        if let Some(max) = self.max {
            filter = filter.with_max_composite(max);
        }
        if let Some(grade) = &self.grade {
            filter = filter.with_grade(parse_grade(grade)?);
        }
        if let Some(label) = &self.positive {
            filter = filter.with_positive_screen(label.as_str());
        }
        if let Some(label) = &self.negative {
            filter = filter.with_negative_screen(label.as_str());
        }
        if self.compliant {
            filter = filter.compliant_only();
        }
        Ok(filter)
    }
}

/// One company row.
#[derive(Debug, Serialize, Tabled)]
pub struct CompanyRow {
    #[tabled(rename = "ISIN")]
    pub isin: String,
    #[tabled(rename = "Company")]
    pub company: String,
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Composite")]
    pub composite: String,
    #[tabled(rename = "Grade")]
    pub grade: String,
    #[tabled(rename = "Compliant")]
    pub compliant: String,
}

impl From<&CompanyRecord> for CompanyRow {
    fn from(company: &CompanyRecord) -> Self {
        Self {
            isin: company.isin.clone(),
            company: company.company_name.clone(),
            sector: company.sector_label().to_string(),
            composite: format_score(company.composite),
            grade: company.grade().label().to_string(),
            compliant: if company.passes_screening() { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Execute the screen command.
pub fn execute(args: ScreenArgs, context: &Context) -> Result<()> {
    let filter = args.to_filter()?;
    let universe = context.universe()?;
    let hits = filter.apply(&universe.companies);

    match context.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        OutputFormat::Csv => {
            let rows: Vec<CompanyRow> = hits.iter().copied().map(CompanyRow::from).collect();
            print_output(&rows, context.format)?;
        }
        OutputFormat::Table => {
            let rows: Vec<CompanyRow> = hits.iter().copied().map(CompanyRow::from).collect();
            print_header("Screening Results");
            print_output(&rows, context.format)?;
            print_info(&format!(
                "{} of {} companies, compliance rate {}",
                hits.len(),
                universe.companies.len(),
                format_percent(compliance_rate(hits.iter().copied()))
            ));
        }
    }

    Ok(())
}
