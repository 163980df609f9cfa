//! Side-by-side comparison tables with best/worst highlighting.

use crate::analytics::{column_stats, extreme_class, ColumnSource, ExtremeClass, StatsBundle};
use crate::types::AnalyticsConfig;
use serde::{Deserialize, Serialize};

/// One cell of a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCell {
    /// The value, if the record has this column.
    pub value: Option<f64>,
    /// Where the value sits relative to the column extremes.
    pub class: ExtremeClass,
}

/// A comparison table over a selected set of records.
///
/// `rows[i]` corresponds to the i-th input record and `rows[i][j]` to
/// `columns[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Column names in display order.
    pub columns: Vec<String>,
    /// Column statistics over the compared records.
    pub stats: StatsBundle,
    /// Cells per record.
    pub rows: Vec<Vec<ComparisonCell>>,
}

impl ComparisonTable {
    /// Returns the cell for a record and column.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&ComparisonCell> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx)
    }
}

/// Builds a comparison table classifying every cell in one stats pass.
#[must_use]
pub fn compare<T: ColumnSource>(records: &[T], columns: &[&str]) -> ComparisonTable {
    compare_with(records, columns, &AnalyticsConfig::default())
}

/// Builds a comparison table, highlighting only the columns the config allows.
#[must_use]
pub fn compare_with<T: ColumnSource>(
    records: &[T],
    columns: &[&str],
    config: &AnalyticsConfig,
) -> ComparisonTable {
    let stats = column_stats(records, columns);

    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|&column| {
                    let value = record.column(column).filter(|v| v.is_finite());
                    let class = match value {
                        Some(v) if config.highlights(column) => extreme_class(column, v, &stats),
                        _ => ExtremeClass::Mid,
                    };
                    ComparisonCell { value, class }
                })
                .collect()
        })
        .collect();

    ComparisonTable {
        columns: columns.iter().map(|c| (*c).to_string()).collect(),
        stats,
        rows,
    }
}
