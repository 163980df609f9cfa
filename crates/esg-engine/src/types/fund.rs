//! Fund record and allocation input.

use super::columns;
use super::company::validate_score;
use crate::analytics::{normalize_allocation, ColumnSource};
use crate::grading::{grade_of, Grade};
use crate::{EsgError, EsgResult};
use serde::{Deserialize, Serialize};

/// Allocation percentage as delivered by the data source.
///
/// Sources disagree on the shape: `"5%"`, `"5"`, `0.05` and blanks all
/// occur. Use [`Allocation::percent`] to get a 0-100 percentage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Allocation {
    /// Numeric allocation (fraction if <= 1, otherwise a percentage).
    Number(f64),
    /// Textual allocation, optionally with a `%` suffix.
    Text(String),
    /// No allocation given.
    #[default]
    Missing,
}

impl Allocation {
    /// Returns the allocation normalized to a 0-100 percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        normalize_allocation(self)
    }

    /// Returns true if no usable allocation is present.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.percent() == 0.0
    }
}

impl From<f64> for Allocation {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Allocation {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Allocation {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A rated fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    /// Fund name (unique key).
    pub fund_name: String,

    /// Fund-level composite score (0-100).
    pub score: f64,

    /// Allocation as delivered by the source.
    #[serde(default)]
    pub allocation: Allocation,
}

impl FundRecord {
    /// Creates a validated fund record.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the score is non-finite or
    /// outside [0, 100].
    pub fn new(
        fund_name: impl Into<String>,
        score: f64,
        allocation: impl Into<Allocation>,
    ) -> EsgResult<Self> {
        let fund_name = fund_name.into().trim().to_string();
        if fund_name.is_empty() {
            return Err(EsgError::missing_field("fund_name"));
        }
        validate_score(&fund_name, columns::SCORE, score)?;

        Ok(Self {
            fund_name,
            score,
            allocation: allocation.into(),
        })
    }

    /// Returns the letter grade derived from the fund score.
    #[must_use]
    pub fn grade(&self) -> Grade {
        grade_of(self.score)
    }

    /// Returns the allocation as a 0-100 percentage.
    #[must_use]
    pub fn allocation_pct(&self) -> f64 {
        self.allocation.percent()
    }
}

impl ColumnSource for FundRecord {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            columns::SCORE => Some(self.score),
            columns::ALLOCATION => Some(self.allocation_pct()),
            _ => None,
        }
    }
}
