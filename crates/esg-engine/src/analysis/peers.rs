//! Comparison population derivation.

use crate::types::CompanyRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Normalizes a sector label for lookup.
///
/// Trims, lowercases and drops a trailing " sector" so that
/// `"Energy Sector"`, `" energy "` and `"ENERGY"` compare equal.
#[must_use]
pub fn normalize_sector_label(label: &str) -> String {
    let lower = label.trim().to_lowercase();
    match lower.strip_suffix(" sector") {
        Some(stripped) if !stripped.trim().is_empty() => stripped.trim_end().to_string(),
        _ => lower,
    }
}

/// Resolves a user-supplied sector name to the label used in the universe.
///
/// Returns `None` if no company carries a matching sector.
#[must_use]
pub fn canonical_sector<'a>(universe: &'a [CompanyRecord], name: &str) -> Option<&'a str> {
    let wanted = normalize_sector_label(name);
    if wanted.is_empty() {
        return None;
    }
    universe
        .iter()
        .map(CompanyRecord::sector_label)
        .find(|label| normalize_sector_label(label) == wanted)
}

/// All companies in the named sector.
#[must_use]
pub fn sector_members<'a>(universe: &'a [CompanyRecord], name: &str) -> Vec<&'a CompanyRecord> {
    match canonical_sector(universe, name) {
        Some(sector) => universe
            .iter()
            .filter(|c| c.sector_label() == sector)
            .collect(),
        None => Vec::new(),
    }
}

/// Companies sharing a company's sector, excluding the company itself.
///
/// An unknown ISIN has no peers.
#[must_use]
pub fn company_peers<'a>(universe: &'a [CompanyRecord], isin: &str) -> Vec<&'a CompanyRecord> {
    let Some(company) = universe.iter().find(|c| c.isin == isin) else {
        return Vec::new();
    };
    let sector = company.sector_label();
    universe
        .iter()
        .filter(|c| c.isin != isin && c.sector_label() == sector)
        .collect()
}

/// Fund holdings: fund name to held ISINs.
///
/// Holdings are not part of the rated records and are injected by the
/// caller. ISINs are deduplicated per fund and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsMap {
    funds: BTreeMap<String, Vec<String>>,
}

impl HoldingsMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a fund holds an ISIN. Blank or duplicate pairs are ignored.
    pub fn insert(&mut self, fund_name: impl Into<String>, isin: impl Into<String>) -> bool {
        let fund_name = fund_name.into().trim().to_string();
        let isin = isin.into().trim().to_string();
        if fund_name.is_empty() || isin.is_empty() {
            return false;
        }
        let held = self.funds.entry(fund_name).or_default();
        if held.contains(&isin) {
            return false;
        }
        held.push(isin);
        true
    }

    /// ISINs held by a fund, empty if the fund is unknown.
    #[must_use]
    pub fn holdings(&self, fund_name: &str) -> &[String] {
        self.funds.get(fund_name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fund names with holdings.
    pub fn funds(&self) -> impl Iterator<Item = &str> {
        self.funds.keys().map(String::as_str)
    }

    /// Number of funds with holdings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.funds.len()
    }

    /// Returns true if no holdings are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

impl<F: Into<String>, I: Into<String>> FromIterator<(F, I)> for HoldingsMap {
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (fund, isin) in iter {
            map.insert(fund, isin);
        }
        map
    }
}

/// Companies held by a fund, in holdings order.
///
/// ISINs missing from the universe are skipped. Each company appears once.
#[must_use]
pub fn fund_holdings<'a>(
    universe: &'a [CompanyRecord],
    holdings: &HoldingsMap,
    fund_name: &str,
) -> Vec<&'a CompanyRecord> {
    let mut seen = HashSet::new();
    holdings
        .holdings(fund_name)
        .iter()
        .filter(|isin| seen.insert(isin.as_str()))
        .filter_map(|isin| universe.iter().find(|c| c.isin == *isin))
        .collect()
}
