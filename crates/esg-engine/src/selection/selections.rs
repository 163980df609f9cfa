//! The three independent selection sets of a session.

use super::SelectionSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity being selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Funds, keyed by fund name.
    #[default]
    Fund,
    /// Companies, keyed by ISIN.
    Company,
    /// Sectors, keyed by sector name.
    Sector,
}

impl SelectionKind {
    /// Returns the kind name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Company => "company",
            Self::Sector => "sector",
        }
    }

    /// Parses a kind name (case-insensitive, plural accepted).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fund" | "funds" => Some(Self::Fund),
            "company" | "companies" => Some(Self::Company),
            "sector" | "sectors" => Some(Self::Sector),
            _ => None,
        }
    }

    /// Returns all kinds.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Fund, Self::Company, Self::Sector]
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Session selection state: one set per kind plus the active kind.
///
/// The sets share nothing. This is plain state passed to whoever needs
/// it; persisting it is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    /// Selected fund names.
    #[serde(default)]
    pub funds: SelectionSet,
    /// Selected ISINs.
    #[serde(default)]
    pub companies: SelectionSet,
    /// Selected sector names.
    #[serde(default)]
    pub sectors: SelectionSet,
    /// Kind currently being browsed.
    #[serde(default)]
    pub active: SelectionKind,
}

impl Selections {
    /// Creates empty selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set for a kind.
    #[must_use]
    pub fn set(&self, kind: SelectionKind) -> &SelectionSet {
        match kind {
            SelectionKind::Fund => &self.funds,
            SelectionKind::Company => &self.companies,
            SelectionKind::Sector => &self.sectors,
        }
    }

    /// Returns the set for a kind, mutably.
    pub fn set_mut(&mut self, kind: SelectionKind) -> &mut SelectionSet {
        match kind {
            SelectionKind::Fund => &mut self.funds,
            SelectionKind::Company => &mut self.companies,
            SelectionKind::Sector => &mut self.sectors,
        }
    }

    /// Clears every set and resets the active kind.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if every set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SelectionKind::all().iter().all(|k| self.set(*k).is_empty())
    }

    /// Serializes to a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Restores from a JSON snapshot.
    ///
    /// Duplicate and blank keys in the snapshot are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
