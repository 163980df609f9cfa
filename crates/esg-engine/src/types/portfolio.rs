//! User-curated portfolio entry.

use super::columns;
use super::CompanyRecord;
use crate::analytics::ColumnSource;
use serde::{Deserialize, Serialize};

/// A company added to a personal comparison list with a declared weight.
///
/// The weight (`aum`) comes from the user, not from the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// ISIN of the company (unique within a list).
    pub isin: String,

    /// Company display name.
    pub company_name: String,

    /// ESG pillar composite copied from the company record.
    pub esg_score: f64,

    /// Declared allocation weight (% of AUM).
    pub aum: f64,
}

impl PortfolioEntry {
    /// Creates an entry for a company with the given weight.
    #[must_use]
    pub fn from_company(company: &CompanyRecord, aum: f64) -> Self {
        Self {
            isin: company.isin.clone(),
            company_name: company.company_name.clone(),
            esg_score: company.esg_score,
            aum,
        }
    }
}

impl ColumnSource for PortfolioEntry {
    fn column(&self, name: &str) -> Option<f64> {
        match name {
            columns::ESG_SCORE => Some(self.esg_score),
            columns::AUM => Some(self.aum),
            _ => None,
        }
    }
}
