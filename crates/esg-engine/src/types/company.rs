//! Company record with pillar scores, screens and derived grade.

use super::columns;
use crate::analytics::ColumnSource;
use crate::grading::{grade_of, Grade};
use crate::{EsgError, EsgResult};
use serde::{Deserialize, Serialize};

/// Label used for companies with no sector.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Environmental, Social and Governance pillar scores (each 0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PillarScores {
    /// Environmental pillar.
    pub e: f64,
    /// Social pillar.
    pub s: f64,
    /// Governance pillar.
    pub g: f64,
}

impl PillarScores {
    /// Creates pillar scores.
    #[must_use]
    pub fn new(e: f64, s: f64, g: f64) -> Self {
        Self { e, s, g }
    }
}

/// A rated company.
///
/// The grade is never stored: [`CompanyRecord::grade`] always derives it
/// from `composite`, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Stable unique identifier (primary key).
    pub isin: String,

    /// Display name. Not guaranteed unique.
    pub company_name: String,

    /// Sector label used for grouping.
    pub sector: String,

    /// Pillar scores.
    pub pillars: PillarScores,

    /// Sector-weighted pillar composite (0-100).
    pub esg_score: f64,

    /// Final score after screens and controversy overlay (0-100).
    pub composite: f64,

    /// Positive screen label, empty when none applies.
    #[serde(default)]
    pub positive_screen: String,

    /// Negative screen label, empty when none applies.
    #[serde(default)]
    pub negative_screen: String,

    /// Controversy severity label, empty when none.
    #[serde(default)]
    pub controversy_rating: String,
}

impl CompanyRecord {
    /// Returns a builder for a company record.
    #[must_use]
    pub fn builder() -> CompanyRecordBuilder {
        CompanyRecordBuilder::new()
    }

    /// Returns the letter grade derived from the composite score.
    #[must_use]
    pub fn grade(&self) -> Grade {
        grade_of(self.composite)
    }

    /// Returns the sector label, or "Unknown" when the sector is blank.
    #[must_use]
    pub fn sector_label(&self) -> &str {
        let sector = self.sector.trim();
        if sector.is_empty() {
            UNKNOWN_SECTOR
        } else {
            sector
        }
    }

    /// Returns true if a positive screen applies.
    #[must_use]
    pub fn has_positive_screen(&self) -> bool {
        !is_blank_screen(&self.positive_screen)
    }

    /// Returns true if a negative screen applies.
    #[must_use]
    pub fn has_negative_screen(&self) -> bool {
        !is_blank_screen(&self.negative_screen)
    }

    /// Returns true if the company passes screening: a positive screen and
    /// no negative screen.
    #[must_use]
    pub fn passes_screening(&self) -> bool {
        self.has_positive_screen() && !self.has_negative_screen()
    }
}

impl ColumnSource for CompanyRecord {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            columns::COMPOSITE => Some(self.composite),
            columns::ESG_SCORE => Some(self.esg_score),
            columns::E_SCORE => Some(self.pillars.e),
            columns::S_SCORE => Some(self.pillars.s),
            columns::G_SCORE => Some(self.pillars.g),
            _ => None,
        }
    }
}

/// Screen labels that are empty, whitespace or "NA" count as no screen.
#[must_use]
pub fn is_blank_screen(label: &str) -> bool {
    let label = label.trim();
    label.is_empty() || label.eq_ignore_ascii_case("NA")
}

/// Builder for a validated [`CompanyRecord`].
///
/// # Example
///
/// ```
/// use esg_engine::types::CompanyRecord;
///
/// let company = CompanyRecord::builder()
///     .isin("INE002A01018")
///     .company_name("Reliance Industries")
///     .sector("Energy")
///     .pillars(62.0, 58.0, 71.0)
///     .esg_score(63.0)
///     .composite(66.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(company.grade().label(), "B+");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompanyRecordBuilder {
    isin: Option<String>,
    company_name: Option<String>,
    sector: String,
    pillars: PillarScores,
    esg_score: f64,
    composite: Option<f64>,
    positive_screen: String,
    negative_screen: String,
    controversy_rating: String,
}

impl CompanyRecordBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ISIN.
    #[must_use]
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Sets the company name.
    #[must_use]
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Sets the E, S and G pillar scores.
    #[must_use]
    pub fn pillars(mut self, e: f64, s: f64, g: f64) -> Self {
        self.pillars = PillarScores::new(e, s, g);
        self
    }

    /// Sets the ESG pillar composite.
    #[must_use]
    pub fn esg_score(mut self, score: f64) -> Self {
        self.esg_score = score;
        self
    }

    /// Sets the final composite score.
    #[must_use]
    pub fn composite(mut self, score: f64) -> Self {
        self.composite = Some(score);
        self
    }

    /// Sets the positive screen label.
    #[must_use]
    pub fn positive_screen(mut self, label: impl Into<String>) -> Self {
        self.positive_screen = label.into();
        self
    }

    /// Sets the negative screen label.
    #[must_use]
    pub fn negative_screen(mut self, label: impl Into<String>) -> Self {
        self.negative_screen = label.into();
        self
    }

    /// Sets the controversy rating label.
    #[must_use]
    pub fn controversy_rating(mut self, label: impl Into<String>) -> Self {
        self.controversy_rating = label.into();
        self
    }

    /// Builds the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the ISIN, name or composite is missing, or any
    /// score is non-finite or outside [0, 100].
    pub fn build(self) -> EsgResult<CompanyRecord> {
        let isin = self
            .isin
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| EsgError::missing_field("isin"))?;

        let company_name = self
            .company_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| EsgError::missing_field("company_name"))?;

        let composite = self
            .composite
            .ok_or_else(|| EsgError::missing_field("composite"))?;

        let scores = [
            (columns::COMPOSITE, composite),
            (columns::ESG_SCORE, self.esg_score),
            (columns::E_SCORE, self.pillars.e),
            (columns::S_SCORE, self.pillars.s),
            (columns::G_SCORE, self.pillars.g),
        ];
        for (field, value) in scores {
            validate_score(&isin, field, value)?;
        }

        Ok(CompanyRecord {
            isin,
            company_name,
            sector: self.sector.trim().to_string(),
            pillars: self.pillars,
            esg_score: self.esg_score,
            composite,
            positive_screen: self.positive_screen.trim().to_string(),
            negative_screen: self.negative_screen.trim().to_string(),
            controversy_rating: self.controversy_rating.trim().to_string(),
        })
    }
}

/// Checks that a score is finite and within [0, 100].
pub(crate) fn validate_score(id: &str, field: &str, value: f64) -> EsgResult<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(EsgError::score_out_of_range(id, field, value))
    }
}
