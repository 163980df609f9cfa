//! Configuration for analysis computation.

use super::FundWeighting;
use serde::{Deserialize, Serialize};

/// Default number of sectors shown in an analysis breakdown.
pub const DEFAULT_TOP_SECTORS: usize = 5;

/// Configuration for analysis computation.
///
/// Controls presentation-facing choices that are not core invariants:
/// breakdown truncation, fund weighting and which columns get highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Number of sectors kept when truncating a breakdown.
    /// `None` keeps every sector.
    pub top_sectors: Option<usize>,

    /// Weighting method for fund aggregation.
    pub fund_weighting: FundWeighting,

    /// Columns eligible for best/worst highlighting.
    /// `None` highlights every column.
    pub highlight_columns: Option<Vec<String>>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_sectors: Some(DEFAULT_TOP_SECTORS),
            fund_weighting: FundWeighting::Allocation,
            highlight_columns: None,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sector truncation count.
    #[must_use]
    pub fn with_top_sectors(mut self, n: usize) -> Self {
        self.top_sectors = Some(n);
        self
    }

    /// Keeps every sector in breakdowns.
    #[must_use]
    pub fn with_all_sectors(mut self) -> Self {
        self.top_sectors = None;
        self
    }

    /// Sets the fund weighting method.
    #[must_use]
    pub fn with_fund_weighting(mut self, method: FundWeighting) -> Self {
        self.fund_weighting = method;
        self
    }

    /// Restricts highlighting to the given columns.
    #[must_use]
    pub fn with_highlight_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlight_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the column may be highlighted.
    #[must_use]
    pub fn highlights(&self, column: &str) -> bool {
        self.highlight_columns
            .as_ref()
            .map_or(true, |cols| cols.iter().any(|c| c == column))
    }
}
