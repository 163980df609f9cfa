//! Data source seam.
//!
//! The engine never loads records itself. Adapters implement
//! [`RecordSource`] and are expected to validate every record at the
//! boundary, so the engine only ever sees well-typed data.

use crate::analysis::HoldingsMap;
use crate::types::{CompanyRecord, FundRecord};

/// Provider of the rated universe.
pub trait RecordSource {
    /// Error raised when the source cannot be read.
    type Error: std::error::Error;

    /// All rated companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn company_records(&self) -> Result<Vec<CompanyRecord>, Self::Error>;

    /// All rated funds.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn fund_records(&self) -> Result<Vec<FundRecord>, Self::Error>;

    /// Fund holdings. Sources without holdings return an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn holdings(&self) -> Result<HoldingsMap, Self::Error> {
        Ok(HoldingsMap::new())
    }
}

/// In-memory universe snapshot.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    /// Rated companies.
    pub companies: Vec<CompanyRecord>,
    /// Rated funds.
    pub funds: Vec<FundRecord>,
    /// Fund holdings.
    pub holdings: HoldingsMap,
}

impl Universe {
    /// Loads a snapshot from a source.
    ///
    /// # Errors
    ///
    /// Returns the source's error if any part cannot be read.
    pub fn load<S: RecordSource>(source: &S) -> Result<Self, S::Error> {
        Ok(Self {
            companies: source.company_records()?,
            funds: source.fund_records()?,
            holdings: source.holdings()?,
        })
    }

    /// Looks up a company by ISIN.
    #[must_use]
    pub fn company(&self, isin: &str) -> Option<&CompanyRecord> {
        self.companies.iter().find(|c| c.isin == isin)
    }

    /// Looks up a fund by name.
    #[must_use]
    pub fn fund(&self, name: &str) -> Option<&FundRecord> {
        self.funds.iter().find(|f| f.fund_name == name)
    }
}
