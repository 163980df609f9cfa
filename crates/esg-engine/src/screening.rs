//! Company screener.
//!
//! A [`CompanyFilter`] combines optional criteria with AND. An empty filter
//! matches every company.

use crate::grading::Grade;
use crate::types::CompanyRecord;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing a company universe.
///
/// # Example
///
/// ```
/// use esg_engine::screening::CompanyFilter;
/// use esg_engine::types::CompanyRecord;
///
/// let companies = vec![
///     CompanyRecord::builder().isin("IN01").company_name("Acme Power")
///         .sector("Utilities").composite(71.0).build().unwrap(),
///     CompanyRecord::builder().isin("IN02").company_name("Bolt Steel")
///         .sector("Metals").composite(48.0).build().unwrap(),
/// ];
///
/// let filter = CompanyFilter::new().with_query("power").with_min_composite(60.0);
/// let hits = filter.apply(&companies);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].isin, "IN01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name or ISIN.
    pub query: Option<String>,
    /// Sector name, case-insensitive exact.
    pub sector: Option<String>,
    /// Minimum composite, inclusive.
    pub min_composite: Option<f64>,
    /// Maximum composite, inclusive.
    pub max_composite: Option<f64>,
    /// Exact derived grade.
    pub grade: Option<Grade>,
    /// Positive screen label, case-insensitive exact.
    pub positive_screen: Option<String>,
    /// Negative screen label, case-insensitive exact.
    pub negative_screen: Option<String>,
    /// Only companies passing screening.
    #[serde(default)]
    pub compliant_only: bool,
}

impl CompanyFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name/ISIN query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = non_blank(query.into());
        self
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = non_blank(sector.into());
        self
    }

    /// Sets the minimum composite.
    #[must_use]
    pub fn with_min_composite(mut self, min: f64) -> Self {
        self.min_composite = Some(min);
        self
    }

    /// Sets the maximum composite.
    #[must_use]
    pub fn with_max_composite(mut self, max: f64) -> Self {
        self.max_composite = Some(max);
        self
    }

    /// Sets the grade.
    #[must_use]
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Sets the positive screen label.
    #[must_use]
    pub fn with_positive_screen(mut self, label: impl Into<String>) -> Self {
        self.positive_screen = non_blank(label.into());
        self
    }

    /// Sets the negative screen label.
    #[must_use]
    pub fn with_negative_screen(mut self, label: impl Into<String>) -> Self {
        self.negative_screen = non_blank(label.into());
        self
    }

    /// Keeps only companies that pass screening.
    #[must_use]
    pub fn compliant_only(mut self) -> Self {
        self.compliant_only = true;
        self
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the company satisfies every criterion.
    #[must_use]
    pub fn matches(&self, company: &CompanyRecord) -> bool {
        if let Some(query) = &self.query {
            let needle = query.trim().to_lowercase();
            let hit = company.company_name.to_lowercase().contains(&needle)
                || company.isin.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(sector) = &self.sector {
            if !company.sector_label().eq_ignore_ascii_case(sector.trim()) {
                return false;
            }
        }

        if self.min_composite.is_some_and(|min| company.composite < min) {
            return false;
        }
        if self.max_composite.is_some_and(|max| company.composite > max) {
            return false;
        }

        if self.grade.is_some_and(|grade| company.grade() != grade) {
            return false;
        }

        if !label_matches(self.positive_screen.as_deref(), &company.positive_screen) {
            return false;
        }
        if !label_matches(self.negative_screen.as_deref(), &company.negative_screen) {
            return false;
        }

        !self.compliant_only || company.passes_screening()
    }

    /// Returns the matching companies in universe order.
    #[must_use]
    pub fn apply<'a>(&self, companies: &'a [CompanyRecord]) -> Vec<&'a CompanyRecord> {
        companies.iter().filter(|c| self.matches(c)).collect()
    }
}

fn non_blank(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn label_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |w| actual.trim().eq_ignore_ascii_case(w.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<CompanyRecord> {
        let rows = [
            ("INE001", "Acme Power", "Utilities", 72.0, "UNGC", ""),
            ("INE002", "Bolt Tobacco", "FMCG", 55.0, "UNGC", "Tobacco"),
            ("INE003", "Core Software", "IT", 81.0, "", ""),
            ("INE004", "Delta Grid", "utilities", 64.0, "UNGC", "NA"),
        ];
        rows.iter()
            .map(|(isin, name, sector, composite, pos, neg)| {
                CompanyRecord::builder()
                    .isin(*isin)
                    .company_name(*name)
                    .sector(*sector)
                    .composite(*composite)
                    .positive_screen(*pos)
                    .negative_screen(*neg)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    fn isins(hits: &[&CompanyRecord]) -> Vec<String> {
        hits.iter().map(|c| c.isin.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let uni = universe();
        let filter = CompanyFilter::new().with_query("  ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&uni).len(), 4);
    }

    #[test]
    fn test_query_name_or_isin() {
        let uni = universe();
        assert_eq!(isins(&CompanyFilter::new().with_query("GRID").apply(&uni)), vec!["INE004"]);
        assert_eq!(isins(&CompanyFilter::new().with_query("ine003").apply(&uni)), vec!["INE003"]);
    }

    #[test]
    fn test_sector_case_insensitive() {
        let uni = universe();
        let hits = CompanyFilter::new().with_sector("UTILITIES").apply(&uni);
        assert_eq!(isins(&hits), vec!["INE001", "INE004"]);
    }

    #[test]
    fn test_composite_range_and_grade() {
        let uni = universe();
        let hits = CompanyFilter::new()
            .with_min_composite(60.0)
            .with_max_composite(80.0)
            .apply(&uni);
        assert_eq!(isins(&hits), vec!["INE001", "INE004"]);

        let hits = CompanyFilter::new().with_grade(Grade::A).apply(&uni);
        assert_eq!(isins(&hits), vec!["INE001"]);
    }

    #[test]
    fn test_screens() {
        let uni = universe();
        let hits = CompanyFilter::new().with_negative_screen("tobacco").apply(&uni);
        assert_eq!(isins(&hits), vec!["INE002"]);

        let hits = CompanyFilter::new().compliant_only().apply(&uni);
        assert_eq!(isins(&hits), vec!["INE001", "INE004"]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let uni = universe();
        let hits = CompanyFilter::new()
            .with_sector("utilities")
            .with_min_composite(70.0)
            .compliant_only()
            .apply(&uni);
        assert_eq!(isins(&hits), vec!["INE001"]);
    }
}
