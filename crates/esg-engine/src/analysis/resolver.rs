//! Analysis of a selected fund, company or sector.

use super::peers::{canonical_sector, company_peers, fund_holdings, sector_members, HoldingsMap};
use crate::analytics::{
    compliance_rate, extremes, sector_breakdown, sector_summary, SectorBreakdownEntry,
};
use crate::grading::{grade_of, Grade};
use crate::selection::SelectionKind;
use crate::types::{CompanyRecord, FundRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder name for a missing best/worst performer.
pub const NOT_AVAILABLE: &str = "N/A";

/// The entity an analysis is run for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisTarget {
    /// Entity kind.
    pub kind: SelectionKind,
    /// Fund name, ISIN or sector name.
    pub key: String,
}

impl AnalysisTarget {
    /// Creates a target.
    #[must_use]
    pub fn new(kind: SelectionKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// Targets a fund by name.
    #[must_use]
    pub fn fund(name: impl Into<String>) -> Self {
        Self::new(SelectionKind::Fund, name)
    }

    /// Targets a company by ISIN.
    #[must_use]
    pub fn company(isin: impl Into<String>) -> Self {
        Self::new(SelectionKind::Company, isin)
    }

    /// Targets a sector by name.
    #[must_use]
    pub fn sector(name: impl Into<String>) -> Self {
        Self::new(SelectionKind::Sector, name)
    }
}

/// Result bundle for an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Size of the resolved population.
    pub total_count: usize,
    /// Mean composite of the population.
    pub average_composite: f64,
    /// Highest composite.
    pub highest: f64,
    /// Lowest composite.
    pub lowest: f64,
    /// Name of the best performer, "N/A" when empty.
    pub best_company: String,
    /// Name of the worst performer, "N/A" when empty.
    pub worst_company: String,
    /// Best performer record.
    pub best: Option<CompanyRecord>,
    /// Worst performer record.
    pub worst: Option<CompanyRecord>,
    /// Sectors of the population, best average first.
    pub sector_breakdown: Vec<SectorBreakdownEntry>,
    /// Percentage of the population passing screening.
    pub compliance_rate: f64,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            total_count: 0,
            average_composite: 0.0,
            highest: 0.0,
            lowest: 0.0,
            best_company: NOT_AVAILABLE.to_string(),
            worst_company: NOT_AVAILABLE.to_string(),
            best: None,
            worst: None,
            sector_breakdown: Vec::new(),
            compliance_rate: 0.0,
        }
    }
}

impl AnalysisResult {
    /// Builds the bundle for an already resolved population.
    #[must_use]
    pub fn from_population(population: &[&CompanyRecord]) -> Self {
        if population.is_empty() {
            return Self::default();
        }

        let summary = sector_summary(population.iter().copied());
        let ex = extremes(population.iter().copied());

        Self {
            total_count: population.len(),
            average_composite: summary.avg_composite,
            highest: ex.best.map_or(0.0, |c| c.composite),
            lowest: ex.worst.map_or(0.0, |c| c.composite),
            best_company: name_or_na(ex.best),
            worst_company: name_or_na(ex.worst),
            best: ex.best.cloned(),
            worst: ex.worst.cloned(),
            sector_breakdown: sector_breakdown(population.iter().copied()),
            compliance_rate: compliance_rate(population.iter().copied()),
        }
    }

    /// Grade of the average composite.
    #[must_use]
    pub fn grade(&self) -> Grade {
        grade_of(self.average_composite)
    }

    /// Returns true if the population was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Leading sectors of the breakdown. `None` returns all of them.
    #[must_use]
    pub fn top_sectors(&self, n: Option<usize>) -> &[SectorBreakdownEntry] {
        let end = n.map_or(self.sector_breakdown.len(), |n| {
            n.min(self.sector_breakdown.len())
        });
        &self.sector_breakdown[..end]
    }
}

fn name_or_na(company: Option<&CompanyRecord>) -> String {
    company.map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.company_name.clone())
}

/// Derives the comparison population for a target.
///
/// - Fund: the companies it holds, provided the fund is rated.
/// - Company: its sector peers, excluding itself.
/// - Sector: every company in the sector.
///
/// Unknown keys resolve to an empty population.
#[must_use]
pub fn resolve_population<'a>(
    target: &AnalysisTarget,
    universe: &'a [CompanyRecord],
    funds: &[FundRecord],
    holdings: &HoldingsMap,
) -> Vec<&'a CompanyRecord> {
    let key = target.key.trim();
    let population = match target.kind {
        SelectionKind::Fund => {
            if funds.iter().any(|f| f.fund_name == key) {
                fund_holdings(universe, holdings, key)
            } else {
                Vec::new()
            }
        }
        SelectionKind::Company => company_peers(universe, key),
        SelectionKind::Sector => sector_members(universe, key),
    };

    debug!(
        kind = %target.kind,
        key,
        population = population.len(),
        "Resolved analysis population"
    );
    population
}

/// Runs an analysis for a target.
///
/// Never fails: an unknown target or an empty population yields a
/// zero-valued bundle with "N/A" performers.
///
/// # Example
///
/// ```
/// use esg_engine::analysis::{analyze, AnalysisTarget, HoldingsMap};
/// use esg_engine::types::CompanyRecord;
///
/// let universe = vec![
///     CompanyRecord::builder().isin("A").company_name("Acme").sector("IT")
///         .composite(72.0).build().unwrap(),
///     CompanyRecord::builder().isin("B").company_name("Bolt").sector("IT")
///         .composite(58.0).build().unwrap(),
/// ];
///
/// let result = analyze(&AnalysisTarget::sector("it"), &universe, &[], &HoldingsMap::new());
/// assert_eq!(result.total_count, 2);
/// assert_eq!(result.best_company, "Acme");
/// ```
#[must_use]
pub fn analyze(
    target: &AnalysisTarget,
    universe: &[CompanyRecord],
    funds: &[FundRecord],
    holdings: &HoldingsMap,
) -> AnalysisResult {
    let population = resolve_population(target, universe, funds, holdings);
    AnalysisResult::from_population(&population)
}

/// Name, score and grade of the selected item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    /// Display name.
    pub name: String,
    /// Score shown for the item.
    pub score: f64,
    /// Grade of the score.
    pub grade: Grade,
}

/// Headline for a target.
///
/// Funds report their own score, companies their composite and sectors the
/// average composite of their members. Returns `None` for unknown keys.
#[must_use]
pub fn headline(
    target: &AnalysisTarget,
    universe: &[CompanyRecord],
    funds: &[FundRecord],
) -> Option<Headline> {
    let key = target.key.trim();
    match target.kind {
        SelectionKind::Fund => funds.iter().find(|f| f.fund_name == key).map(|f| Headline {
            name: f.fund_name.clone(),
            score: f.score,
            grade: f.grade(),
        }),
        SelectionKind::Company => universe.iter().find(|c| c.isin == key).map(|c| Headline {
            name: c.company_name.clone(),
            score: c.composite,
            grade: c.grade(),
        }),
        SelectionKind::Sector => {
            let sector = canonical_sector(universe, key)?;
            let summary = sector_summary(sector_members(universe, sector));
            Some(Headline {
                name: sector.to_string(),
                score: summary.avg_composite,
                grade: summary.grade,
            })
        }
    }
}
