//! CSV-backed fund holdings.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use esg_engine::analysis::HoldingsMap;

use crate::error::{LoadError, LoadResult};

/// CSV record for a single holding.
#[derive(Debug, Deserialize)]
struct HoldingRow {
    #[serde(rename = "fund_name", alias = "Fund Name", default)]
    fund_name: Option<String>,
    #[serde(rename = "isin", alias = "ISIN", default)]
    isin: Option<String>,
}

/// CSV-based holdings source (`fund_name,isin` per line).
#[derive(Debug, Clone)]
pub struct CsvHoldingsSource {
    file_path: PathBuf,
    holdings: HoldingsMap,
}

impl CsvHoldingsSource {
    /// Create a new CSV holdings source and load it.
    ///
    /// A missing file yields no holdings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new(file_path: impl AsRef<Path>) -> LoadResult<Self> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            holdings: HoldingsMap::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload holdings from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn reload(&mut self) -> LoadResult<()> {
        self.holdings = HoldingsMap::new();
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "Holdings file not found, no holdings loaded");
            return Ok(());
        }
        debug!(path = %self.file_path.display(), "Loading holdings");

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(&self.file_path)
            .map_err(|e| LoadError::from_csv(&self.file_path, &e))?;

        let mut rows = 0usize;
        for (index, result) in reader.deserialize::<HoldingRow>().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    warn!(line = index + 2, error = %e, "Unreadable holding skipped");
                    continue;
                }
            };
            let fund = row.fund_name.unwrap_or_default();
            let isin = row.isin.unwrap_or_default();
            if self.holdings.insert(fund, isin) {
                rows += 1;
            } else {
                warn!(line = index + 2, "Blank or duplicate holding skipped");
            }
        }

        info!(
            path = %self.file_path.display(),
            funds = self.holdings.len(),
            holdings = rows,
            "Loaded holdings"
        );
        Ok(())
    }

    /// Loaded holdings.
    #[must_use]
    pub fn holdings(&self) -> &HoldingsMap {
        &self.holdings
    }
}
