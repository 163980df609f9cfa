//! Grade and legend commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use esg_engine::{grade_of, Grade};

use crate::commands::{validate_score, Context};
use crate::output::{print_header, print_metrics, print_output, KeyValue};

/// Arguments for the grade command.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Composite score (0-100)
    #[arg(allow_negative_numbers = true)]
    pub score: f64,
}

/// One row of the grade legend.
#[derive(Debug, Serialize, Tabled)]
struct LegendRow {
    #[tabled(rename = "Grade")]
    grade: String,
    #[tabled(rename = "Score Range")]
    range: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Rank")]
    rank: u8,
}

impl From<Grade> for LegendRow {
    fn from(grade: Grade) -> Self {
        Self {
            grade: grade.label().to_string(),
            range: grade.score_range().to_string(),
            category: grade.category().to_string(),
            rank: grade.rank(),
        }
    }
}

/// Execute the grade command.
pub fn execute(args: GradeArgs, context: &Context) -> Result<()> {
    let score = validate_score(args.score)?;
    let grade = grade_of(score);

    let results = vec![
        KeyValue::from_score("Score", score),
        KeyValue::new("Grade", grade.label()),
        KeyValue::new("Category", grade.category()),
        KeyValue::new("Score Range", grade.score_range()),
        KeyValue::new("Rank", grade.rank().to_string()),
    ];

    if context.is_table() {
        print_header("ESG Grade");
    }
    print_metrics(&results, context.format)
}

/// Execute the legend command.
pub fn legend(context: &Context) -> Result<()> {
    let rows: Vec<LegendRow> = Grade::all().iter().copied().map(LegendRow::from).collect();

    if context.is_table() {
        print_header("Grade Legend");
    }
    print_output(&rows, context.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_rows() {
        let rows: Vec<LegendRow> = Grade::all().iter().copied().map(LegendRow::from).collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].grade, "A+");
        assert_eq!(rows[0].range, ">75");
        assert_eq!(rows[6].category, "Nascent");
    }
}
