//! # ESG Ext File
//!
//! File-based data sources for the ESG engine.
//!
//! This crate is the boundary where raw data is validated before it reaches
//! the engine:
//! - CSV-based company source (ratings workbook export)
//! - CSV-based fund source
//! - CSV-based fund holdings
//! - JSON session store for selections
//!
//! Invalid rows are logged and skipped rather than failing the whole load.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod holdings;
mod records;
mod session;

pub use error::{LoadError, LoadResult};
pub use holdings::CsvHoldingsSource;
pub use records::{CsvCompanySource, CsvFundSource};
pub use session::SessionStore;

use std::path::Path;

use esg_engine::analysis::HoldingsMap;
use esg_engine::types::{CompanyRecord, FundRecord};
use esg_engine::RecordSource;

/// File-backed record source combining companies, funds and holdings.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    companies: CsvCompanySource,
    funds: CsvFundSource,
    holdings: Option<CsvHoldingsSource>,
}

impl FileRecordSource {
    /// Reloads every file.
    ///
    /// # Errors
    ///
    /// Returns an error if any file exists but cannot be read or parsed.
    pub fn reload(&mut self) -> LoadResult<()> {
        self.companies.reload()?;
        self.funds.reload()?;
        if let Some(holdings) = self.holdings.as_mut() {
            holdings.reload()?;
        }
        Ok(())
    }
}

impl RecordSource for FileRecordSource {
    type Error = LoadError;

    fn company_records(&self) -> LoadResult<Vec<CompanyRecord>> {
        Ok(self.companies.companies().to_vec())
    }

    fn fund_records(&self) -> LoadResult<Vec<FundRecord>> {
        Ok(self.funds.funds().to_vec())
    }

    fn holdings(&self) -> LoadResult<HoldingsMap> {
        Ok(self
            .holdings
            .as_ref()
            .map(|h| h.holdings().clone())
            .unwrap_or_default())
    }
}

/// Create a file-based record source.
///
/// # Errors
///
/// Returns an error if any existing file cannot be read or parsed.
pub fn create_file_record_source(
    companies_csv: impl AsRef<Path>,
    funds_csv: impl AsRef<Path>,
    holdings_csv: Option<&Path>,
) -> LoadResult<FileRecordSource> {
    Ok(FileRecordSource {
        companies: CsvCompanySource::new(companies_csv)?,
        funds: CsvFundSource::new(funds_csv)?,
        holdings: holdings_csv.map(CsvHoldingsSource::new).transpose()?,
    })
}
