//! Sector-level aggregation.

use crate::grading::{grade_of, Grade};
use crate::types::CompanyRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Average composite, derived grade and member count for a sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// Mean composite over the members.
    pub avg_composite: f64,
    /// Grade of the mean composite.
    pub grade: Grade,
    /// Number of members.
    pub count: usize,
}

impl Default for SectorSummary {
    fn default() -> Self {
        Self {
            avg_composite: 0.0,
            grade: Grade::D,
            count: 0,
        }
    }
}

/// Summarizes a group of companies.
///
/// An empty group yields `{0, D, 0}`.
#[must_use]
pub fn sector_summary<'a, I>(companies: I) -> SectorSummary
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let (sum, count) = companies
        .into_iter()
        .fold((0.0, 0usize), |(s, n), c| (s + c.composite, n + 1));
    if count == 0 {
        return SectorSummary::default();
    }
    let avg = sum / count as f64;

    SectorSummary {
        avg_composite: avg,
        grade: grade_of(avg),
        count,
    }
}

/// One row of a sector breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBreakdownEntry {
    /// Sector label ("Unknown" for blank sectors).
    pub sector: String,
    /// Number of companies in the sector.
    pub count: usize,
    /// Mean composite of the sector.
    pub avg_composite: f64,
    /// Highest-composite company in the sector, first one on ties.
    pub best_company: String,
}

impl SectorBreakdownEntry {
    /// Returns the grade of the sector average.
    #[must_use]
    pub fn grade(&self) -> Grade {
        grade_of(self.avg_composite)
    }
}

/// Groups a population by sector and ranks sectors by average composite.
///
/// Sorted descending by `avg_composite`, ties broken by sector name so the
/// output is deterministic.
#[must_use]
pub fn sector_breakdown<'a, I>(companies: I) -> Vec<SectorBreakdownEntry>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut groups: HashMap<&str, (usize, f64, &CompanyRecord)> = HashMap::new();
    for company in companies {
        let entry = groups
            .entry(company.sector_label())
            .or_insert((0, 0.0, company));
        entry.0 += 1;
        entry.1 += company.composite;
        if company.composite > entry.2.composite {
            entry.2 = company;
        }
    }

    let mut out: Vec<SectorBreakdownEntry> = groups
        .into_iter()
        .map(|(sector, (count, sum, best))| SectorBreakdownEntry {
            sector: sector.to_string(),
            count,
            avg_composite: sum / count as f64,
            best_company: best.company_name.clone(),
        })
        .collect();

    out.sort_by(|a, b| {
        b.avg_composite
            .total_cmp(&a.avg_composite)
            .then_with(|| a.sector.cmp(&b.sector))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn company(isin: &str, sector: &str, composite: f64) -> CompanyRecord {
        CompanyRecord::builder()
            .isin(isin)
            .company_name(format!("Company {isin}"))
            .sector(sector)
            .composite(composite)
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary() {
        let companies = vec![company("A", "IT", 70.0), company("B", "IT", 80.0)];
        let s = sector_summary(&companies);
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.avg_composite, 75.0);
        assert_eq!(s.grade, Grade::A);
    }

    #[test]
    fn test_summary_empty() {
        let s = sector_summary(&Vec::<CompanyRecord>::new());
        assert_eq!(s.avg_composite, 0.0);
        assert_eq!(s.grade, Grade::D);
        assert_eq!(s.count, 0);
    }

    #[test]
    fn test_breakdown_sorted_desc() {
        let companies = vec![
            company("A", "Energy", 50.0),
            company("B", "IT", 80.0),
            company("C", "Energy", 60.0),
            company("D", "", 65.0),
        ];
        let rows = sector_breakdown(&companies);
        let names: Vec<&str> = rows.iter().map(|r| r.sector.as_str()).collect();
        assert_eq!(names, vec!["IT", "Unknown", "Energy"]);

        let energy = &rows[2];
        assert_eq!(energy.count, 2);
        assert_relative_eq!(energy.avg_composite, 55.0);
        assert_eq!(energy.grade(), Grade::CPlus);
    }

    #[test]
    fn test_breakdown_best_company_per_sector() {
        let companies = vec![
            company("A", "Energy", 50.0),
            company("B", "IT", 80.0),
            company("C", "Energy", 60.0),
            company("D", "Energy", 60.0),
            company("E", "IT", 72.0),
        ];
        let rows = sector_breakdown(&companies);
        assert_eq!(rows[0].sector, "IT");
        assert_eq!(rows[0].best_company, "Company B");
        // C and D tie at 60; the first one wins.
        assert_eq!(rows[1].best_company, "Company C");
    }

    #[test]
    fn test_breakdown_ties_by_name() {
        let companies = vec![company("A", "Zinc", 60.0), company("B", "Alum", 60.0)];
        let rows = sector_breakdown(&companies);
        assert_eq!(rows[0].sector, "Alum");
        assert_eq!(rows[1].sector, "Zinc");
    }

    #[test]
    fn test_breakdown_empty() {
        assert!(sector_breakdown(&Vec::<CompanyRecord>::new()).is_empty());
    }
}
