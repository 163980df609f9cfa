//! User-curated portfolio list.

use crate::types::{CompanyRecord, PortfolioEntry};
use serde::{Deserialize, Serialize};

/// A personal list of companies with declared AUM weights.
///
/// Entries are unique by ISIN and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioList {
    entries: Vec<PortfolioEntry>,
}

impl PortfolioList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    ///
    /// Rejects duplicate ISINs and non-positive or non-finite weights.
    pub fn add(&mut self, entry: PortfolioEntry) -> bool {
        if !(entry.aum.is_finite() && entry.aum > 0.0) || self.contains(&entry.isin) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Looks up a company by ISIN and adds it with the given weight.
    ///
    /// Returns false for unknown ISINs and anything [`PortfolioList::add`]
    /// rejects.
    pub fn add_from_universe(&mut self, universe: &[CompanyRecord], isin: &str, aum: f64) -> bool {
        universe
            .iter()
            .find(|c| c.isin == isin)
            .is_some_and(|company| self.add(PortfolioEntry::from_company(company, aum)))
    }

    /// Removes the entry with this ISIN.
    pub fn remove(&mut self, isin: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.isin != isin);
        self.entries.len() != before
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if the ISIN is in the list.
    #[must_use]
    pub fn contains(&self, isin: &str) -> bool {
        self.entries.iter().any(|e| e.isin == isin)
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of declared weights.
    #[must_use]
    pub fn total_aum(&self) -> f64 {
        self.entries.iter().map(|e| e.aum).sum()
    }

    /// AUM-weighted mean ESG score.
    ///
    /// `add` only accepts positive AUM, so the total is zero only for an
    /// empty list, which scores `0`.
    #[must_use]
    pub fn weighted_esg_score(&self) -> f64 {
        let total = self.total_aum();
        if total <= 0.0 {
            return 0.0;
        }
        self.entries.iter().map(|e| e.esg_score * e.aum).sum::<f64>() / total
    }
}
