//! CSV-backed company and fund sources.
//!
//! Headers follow the ratings workbook export ("Company Name",
//! "Composite Rating", ...). Snake-case headers are accepted as aliases.
//! Every row is validated here; rows that fail validation are logged with
//! their line number and skipped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use esg_engine::types::{Allocation, CompanyRecord, FundRecord};
use esg_engine::{EsgResult, Grade};

use crate::error::{LoadError, LoadResult};

// =============================================================================
// HELPERS
// =============================================================================

/// Parses a numeric cell. Blank cells read as 0.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.replace(',', "").parse::<f64>().ok()
}

fn text(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn open_reader(path: &Path) -> LoadResult<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LoadError::from_csv(path, &e))
}

/// Line number of a data row (header is line 1).
fn line_of(index: usize) -> usize {
    index + 2
}

// =============================================================================
// CSV COMPANY SOURCE
// =============================================================================

/// CSV record for companies.
#[derive(Debug, Deserialize)]
struct CompanyRow {
    #[serde(rename = "ISIN", alias = "isin", default)]
    isin: Option<String>,
    #[serde(rename = "Company Name", alias = "company_name", default)]
    company_name: Option<String>,
    #[serde(rename = "Sector", alias = "sector", default)]
    sector: Option<String>,
    #[serde(rename = "E Pillar", alias = "e_score", default)]
    e_pillar: Option<String>,
    #[serde(rename = "S Pillar", alias = "s_score", default)]
    s_pillar: Option<String>,
    #[serde(rename = "G Pillar", alias = "g_score", default)]
    g_pillar: Option<String>,
    #[serde(rename = "ESG Pillar", alias = "esg_score", default)]
    esg_pillar: Option<String>,
    #[serde(rename = "Composite Rating", alias = "composite", default)]
    composite: Option<String>,
    #[serde(rename = "Positive Screen", alias = "positive_screen", default)]
    positive_screen: Option<String>,
    #[serde(rename = "Negative Screen", alias = "negative_screen", default)]
    negative_screen: Option<String>,
    #[serde(rename = "Controversy Rating", alias = "controversy_rating", default)]
    controversy_rating: Option<String>,
    #[serde(rename = "ESG Rating", alias = "grade", default)]
    stored_grade: Option<String>,
}

impl CompanyRow {
    fn into_record(self, line: usize) -> Result<CompanyRecord, String> {
        let number = |field: &str, raw: &Option<String>| {
            parse_number(raw.as_deref())
                .ok_or_else(|| format!("{field} is not a number: {:?}", raw.as_deref().unwrap_or("")))
        };

        if self.composite.as_deref().map_or(true, |c| c.trim().is_empty()) {
            debug!(line, "Composite Rating cell is empty, reading as 0");
        }

        let e = number("E Pillar", &self.e_pillar)?;
        let s = number("S Pillar", &self.s_pillar)?;
        let g = number("G Pillar", &self.g_pillar)?;
        let esg = number("ESG Pillar", &self.esg_pillar)?;
        let composite = number("Composite Rating", &self.composite)?;

        let built: EsgResult<CompanyRecord> = CompanyRecord::builder()
            .isin(text(self.isin))
            .company_name(text(self.company_name))
            .sector(text(self.sector))
            .pillars(e, s, g)
            .esg_score(esg)
            .composite(composite)
            .positive_screen(text(self.positive_screen))
            .negative_screen(text(self.negative_screen))
            .controversy_rating(text(self.controversy_rating))
            .build();
        let company = built.map_err(|e| e.to_string())?;

        let stored = text(self.stored_grade);
        if !stored.is_empty() && Grade::parse(&stored) != Some(company.grade()) {
            warn!(
                line,
                isin = %company.isin,
                stored = %stored,
                derived = %company.grade(),
                "Stored grade disagrees with composite, using derived grade"
            );
        }

        Ok(company)
    }
}

/// CSV-based company source.
#[derive(Debug, Clone)]
pub struct CsvCompanySource {
    file_path: PathBuf,
    companies: Vec<CompanyRecord>,
}

impl CsvCompanySource {
    /// Create a new CSV company source and load it.
    ///
    /// A missing file yields an empty source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new(file_path: impl AsRef<Path>) -> LoadResult<Self> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            companies: Vec::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload companies from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn reload(&mut self) -> LoadResult<()> {
        self.companies.clear();
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "Company file not found, source is empty");
            return Ok(());
        }
        debug!(path = %self.file_path.display(), "Loading companies");

        let mut reader = open_reader(&self.file_path)?;
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (index, result) in reader.deserialize::<CompanyRow>().enumerate() {
            let line = line_of(index);
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    warn!(line, error = %e, "Unreadable row skipped");
                    skipped += 1;
                    continue;
                }
            };

            if row.company_name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                continue;
            }

            match row.into_record(line) {
                Ok(company) if !seen.insert(company.isin.clone()) => {
                    warn!(line, isin = %company.isin, "Duplicate ISIN, row skipped");
                    skipped += 1;
                }
                Ok(company) => self.companies.push(company),
                Err(reason) => {
                    warn!(line, %reason, "Invalid company row skipped");
                    skipped += 1;
                }
            }
        }

        info!(
            path = %self.file_path.display(),
            loaded = self.companies.len(),
            skipped,
            "Loaded companies"
        );
        Ok(())
    }

    /// Loaded companies in file order.
    #[must_use]
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    /// Source file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

// =============================================================================
// CSV FUND SOURCE
// =============================================================================

/// CSV record for funds.
#[derive(Debug, Deserialize)]
struct FundRow {
    #[serde(rename = "Fund Name", alias = "fund_name", default)]
    fund_name: Option<String>,
    #[serde(rename = "Score", alias = "score", default)]
    score: Option<String>,
    #[serde(rename = "Percentage", alias = "allocation", default)]
    percentage: Option<String>,
    #[serde(rename = "Grade", alias = "grade", default)]
    stored_grade: Option<String>,
}

impl FundRow {
    fn into_record(self, line: usize) -> Result<FundRecord, String> {
        if self.score.as_deref().map_or(true, |c| c.trim().is_empty()) {
            debug!(line, "Score cell is empty, reading as 0");
        }

        let score = parse_number(self.score.as_deref()).ok_or_else(|| {
            format!("Score is not a number: {:?}", self.score.as_deref().unwrap_or(""))
        })?;

        let percentage = text(self.percentage);
        let allocation = if percentage.is_empty() {
            Allocation::Missing
        } else {
            Allocation::Text(percentage)
        };

        let fund = FundRecord::new(text(self.fund_name), score, allocation).map_err(|e| e.to_string())?;

        let stored = text(self.stored_grade);
        if !stored.is_empty() && Grade::parse(&stored) != Some(fund.grade()) {
            warn!(
                line,
                fund = %fund.fund_name,
                stored = %stored,
                derived = %fund.grade(),
                "Stored grade disagrees with score, using derived grade"
            );
        }
        if fund.allocation.is_missing() {
            debug!(line, fund = %fund.fund_name, "Fund has no usable allocation");
        }

        Ok(fund)
    }
}

/// CSV-based fund source.
#[derive(Debug, Clone)]
pub struct CsvFundSource {
    file_path: PathBuf,
    funds: Vec<FundRecord>,
}

impl CsvFundSource {
    /// Create a new CSV fund source and load it.
    ///
    /// A missing file yields an empty source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new(file_path: impl AsRef<Path>) -> LoadResult<Self> {
        let mut source = Self {
            file_path: file_path.as_ref().to_path_buf(),
            funds: Vec::new(),
        };
        source.reload()?;
        Ok(source)
    }

    /// Reload funds from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn reload(&mut self) -> LoadResult<()> {
        self.funds.clear();
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "Fund file not found, source is empty");
            return Ok(());
        }
        debug!(path = %self.file_path.display(), "Loading funds");

        let mut reader = open_reader(&self.file_path)?;
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for (index, result) in reader.deserialize::<FundRow>().enumerate() {
            let line = line_of(index);
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    warn!(line, error = %e, "Unreadable row skipped");
                    skipped += 1;
                    continue;
                }
            };

            if row.fund_name.as_deref().map_or(true, |n| n.trim().is_empty()) {
                continue;
            }

            match row.into_record(line) {
                Ok(fund) if !seen.insert(fund.fund_name.clone()) => {
                    warn!(line, fund = %fund.fund_name, "Duplicate fund name, row skipped");
                    skipped += 1;
                }
                Ok(fund) => self.funds.push(fund),
                Err(reason) => {
                    warn!(line, %reason, "Invalid fund row skipped");
                    skipped += 1;
                }
            }
        }

        info!(
            path = %self.file_path.display(),
            loaded = self.funds.len(),
            skipped,
            "Loaded funds"
        );
        Ok(())
    }

    /// Loaded funds in file order.
    #[must_use]
    pub fn funds(&self) -> &[FundRecord] {
        &self.funds
    }

    /// Source file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(None), Some(0.0));
        assert_eq!(parse_number(Some("  ")), Some(0.0));
        assert_eq!(parse_number(Some(" 72.5 ")), Some(72.5));
        assert_eq!(parse_number(Some("1,000")), Some(1000.0));
        assert_eq!(parse_number(Some("n/a")), None);
    }

    #[test]
    fn test_load_companies_workbook_headers() {
        let file = write_csv(
            "Company Name,Sector,E Pillar,S Pillar,G Pillar,Positive Screen,Negative Screen,Controversy Rating,ESG Rating,ISIN,ESG Pillar,Composite Rating\n\
             Tata Power,Utilities,72,68,75,UNGC Signatory,,Low,A,INE001,71.7,74\n\
             Coal Co,Energy,30,45,55,,Thermal Coal,High,D,INE002,43.3,42\n",
        );
        let source = CsvCompanySource::new(file.path()).unwrap();
        let companies = source.companies();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].isin, "INE001");
        assert_eq!(companies[0].pillars.g, 75.0);
        assert_eq!(companies[0].grade(), Grade::A);
        assert!(companies[0].passes_screening());
        assert_eq!(companies[1].negative_screen, "Thermal Coal");
    }

    #[test]
    fn test_load_companies_snake_case_headers() {
        let file = write_csv(
            "isin,company_name,sector,e_score,s_score,g_score,esg_score,composite\n\
             INE010,Infosys,IT,80,78,82,80,81\n",
        );
        let source = CsvCompanySource::new(file.path()).unwrap();
        assert_eq!(source.companies().len(), 1);
        assert_eq!(source.companies()[0].composite, 81.0);
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let file = write_csv(
            "ISIN,Company Name,Sector,Composite Rating\n\
             INE001,Good Co,IT,70\n\
             INE002,Out Of Range,IT,140\n\
             INE003,Garbage,IT,abc\n\
             ,No Isin,IT,60\n\
             INE004,,IT,60\n\
             INE001,Duplicate,IT,65\n\
             INE005,Blank Score,IT,\n",
        );
        let source = CsvCompanySource::new(file.path()).unwrap();
        let isins: Vec<&str> = source.companies().iter().map(|c| c.isin.as_str()).collect();
        assert_eq!(isins, vec!["INE001", "INE005"]);
        assert_eq!(source.companies()[1].composite, 0.0);
    }

    #[test]
    fn test_unreadable_row_does_not_abort_load() {
        let mut bytes = b"ISIN,Company Name,Sector,Composite Rating\nIN01,Good Co,IT,70\nIN02,Bad".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b",IT,60\nIN03,Other Co,IT,65\n");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();

        let source = CsvCompanySource::new(file.path()).unwrap();
        let isins: Vec<&str> = source.companies().iter().map(|c| c.isin.as_str()).collect();
        assert_eq!(isins, vec!["IN01", "IN03"]);
    }

    #[test]
    fn test_unreadable_fund_row_does_not_abort_load() {
        let mut bytes = b"Fund Name,Score,Percentage\nAlpha,80,40%\nBe".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"ta,60,60%\nGamma,55,10%\n");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();

        let source = CsvFundSource::new(file.path()).unwrap();
        let names: Vec<&str> = source.funds().iter().map(|f| f.fund_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_stored_grade_is_recomputed() {
        let file = write_csv(
            "ISIN,Company Name,Composite Rating,ESG Rating\n\
             INE001,Drifted,76,B\n",
        );
        let source = CsvCompanySource::new(file.path()).unwrap();
        assert_eq!(source.companies()[0].grade(), Grade::APlus);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let source = CsvCompanySource::new("/nonexistent/companies.csv").unwrap();
        assert!(source.companies().is_empty());

        let source = CsvFundSource::new("/nonexistent/funds.csv").unwrap();
        assert!(source.funds().is_empty());
    }

    #[test]
    fn test_load_funds() {
        let file = write_csv(
            "Fund Name,Score,Percentage,Grade\n\
             Alpha,80,40%,A+\n\
             Beta,60,0.6,B\n\
             Gamma,55,,C+\n\
             Alpha,70,10%,A\n\
             ,50,5%,C\n\
             Delta,200,5%,A\n",
        );
        let source = CsvFundSource::new(file.path()).unwrap();
        let funds = source.funds();

        assert_eq!(funds.len(), 3);
        assert_eq!(funds[0].allocation_pct(), 40.0);
        assert!((funds[1].allocation_pct() - 60.0).abs() < 1e-9);
        assert_eq!(funds[2].allocation, Allocation::Missing);
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let mut file = write_csv("Fund Name,Score,Percentage\nAlpha,80,40%\n");
        let mut source = CsvFundSource::new(file.path()).unwrap();
        assert_eq!(source.funds().len(), 1);

        file.write_all(b"Beta,60,60%\n").unwrap();
        file.flush().unwrap();
        source.reload().unwrap();
        assert_eq!(source.funds().len(), 2);
    }
}
