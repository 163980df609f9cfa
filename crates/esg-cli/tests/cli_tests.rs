//! End-to-end tests for the `esg` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const COMPANIES: &str = "\
ISIN,Company Name,Sector,E Pillar,S Pillar,G Pillar,ESG Pillar,Composite Rating,Positive Screen,Negative Screen,Controversy Rating,ESG Rating
INE001,Tata Power,Utilities,72,68,75,71.7,74,UNGC Signatory,,Low,A
INE002,Reliance Industries,Energy,55,62,70,62.3,63,UNGC Signatory,,Medium,B
INE003,Coal Mining Co,Energy Sector,30,45,55,43.3,42,,Thermal Coal,High,D
INE004,Infosys,IT,80,78,82,80,81,UNGC Signatory,,Low,A+
";

const FUNDS: &str = "\
Fund Name,Score,Percentage,Grade
Green Growth Fund,72,40%,A
Balanced Fund,64,60%,B
";

const HOLDINGS: &str = "\
fund_name,isin
Green Growth Fund,INE001
Green Growth Fund,INE004
Balanced Fund,INE002
Balanced Fund,INE003
";

/// Temporary data directory with the three CSVs.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("companies.csv"), COMPANIES).unwrap();
        fs::write(dir.path().join("funds.csv"), FUNDS).unwrap();
        fs::write(dir.path().join("holdings.csv"), HOLDINGS).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn esg(&self) -> Command {
        let mut cmd = Command::cargo_bin("esg").unwrap();
        cmd.env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.path("esg.toml"))
            .arg("--companies")
            .arg(self.path("companies.csv"))
            .arg("--funds")
            .arg(self.path("funds.csv"))
            .arg("--holdings")
            .arg(self.path("holdings.csv"))
            .arg("--session")
            .arg(self.path("session.json"));
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_help() {
    Command::cargo_bin("esg")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn test_grade_table() {
    Fixture::new()
        .esg()
        .args(["grade", "72"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced"))
        .stdout(predicate::str::contains("70-74"));
}

#[test]
fn test_grade_json() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "grade", "75.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Grade\": \"A+\""))
        .stdout(predicate::str::contains("\"Category\": \"Leadership\""));
}

#[test]
fn test_grade_rejects_nan() {
    Fixture::new()
        .esg()
        .args(["grade", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid score"));
}

#[test]
fn test_legend() {
    Fixture::new()
        .esg()
        .args(["--format", "csv", "legend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A+,>75,Leadership,6"))
        .stdout(predicate::str::contains("D,<50,Nascent,0"));
}

#[test]
fn test_sector_summary_tolerates_suffix() {
    // Energy holds Reliance (63) only; "Energy Sector" is its own label.
    Fixture::new()
        .esg()
        .args(["--format", "json", "sector", "ENERGY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Companies\": \"1\""))
        .stdout(predicate::str::contains("\"Average Composite\": \"63.00\""))
        .stdout(predicate::str::contains("\"Grade\": \"B\""));
}

#[test]
fn test_unknown_sector_is_zero_summary() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "sector", "Aerospace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Companies\": \"0\""))
        .stdout(predicate::str::contains("\"Grade\": \"D\""))
        .stderr(predicate::str::contains("No companies"));
}

#[test]
fn test_funds_weighted_score() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "funds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weighted_score\": 67.2"))
        .stdout(predicate::str::contains("\"weighting\": \"allocation\""));
}

#[test]
fn test_funds_equal_weighting() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "funds", "--equal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weighted_score\": 68.0"));
}

#[test]
fn test_funds_aum_covered() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "funds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aum_covered\": 100.0"));

    Fixture::new()
        .esg()
        .args(["funds", "Green Growth Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AUM covered: 40.0%"));
}

#[test]
fn test_analyze_fund() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "analyze", "--kind", "fund", "Balanced Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_count\": 2"))
        .stdout(predicate::str::contains("\"best_company\": \"Reliance Industries\""))
        .stdout(predicate::str::contains("\"worst_company\": \"Coal Mining Co\""))
        .stdout(predicate::str::contains("\"compliance_rate\": 50.0"));
}

#[test]
fn test_analyze_fund_sector_leaders() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "analyze", "--kind", "fund", "Balanced Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"best_company\": \"Coal Mining Co\""));

    Fixture::new()
        .esg()
        .args(["analyze", "--kind", "fund", "Balanced Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best Company"))
        .stdout(predicate::str::contains("Coal Mining Co"));
}

#[test]
fn test_sector_overview_lists_best_company() {
    Fixture::new()
        .esg()
        .args(["--format", "csv", "sector"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy,1,63.00,B,Reliance Industries"))
        .stdout(predicate::str::contains("Energy Sector,1,42.00,D,Coal Mining Co"));
}

#[test]
fn test_analyze_company_excludes_itself() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "analyze", "--kind", "company", "INE001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_count\": 0"))
        .stdout(predicate::str::contains("\"best_company\": \"N/A\""));
}

#[test]
fn test_analyze_table() {
    Fixture::new()
        .esg()
        .args(["analyze", "--kind", "sector", "it"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sector Analysis"))
        .stdout(predicate::str::contains("Infosys"));
}

#[test]
fn test_analyze_without_key_or_selection() {
    Fixture::new()
        .esg()
        .args(["analyze", "--kind", "company"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn test_screen_compliant() {
    Fixture::new()
        .esg()
        .args(["--format", "csv", "screen", "--compliant", "--min", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INE001"))
        .stdout(predicate::str::contains("INE004"))
        .stdout(predicate::str::contains("INE002").not());
}

#[test]
fn test_screen_bad_grade() {
    Fixture::new()
        .esg()
        .args(["screen", "--grade", "E"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid grade"));
}

#[test]
fn test_compare_marks_extremes() {
    Fixture::new()
        .esg()
        .args(["--format", "csv", "compare", "INE001", "INE004", "INE003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Infosys,81.00 ▲"))
        .stdout(predicate::str::contains("Coal Mining Co,42.00 ▼"));
}

#[test]
fn test_compare_repeated_isin_once() {
    let output = Fixture::new()
        .esg()
        .args(["--format", "csv", "compare", "INE001", "INE001", " INE004 "])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Tata Power").count(), 1);
    assert_eq!(stdout.matches("Infosys").count(), 1);
}

#[test]
fn test_compare_json_aum_covered() {
    Fixture::new()
        .esg()
        .args(["--format", "json", "compare", "INE001", "INE004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aum_covered\": 100.0"));
}

#[test]
fn test_select_flow() {
    let fixture = Fixture::new();
    let session = fixture.path("session.json");

    fixture
        .esg()
        .args(["select", "add", "--kind", "company", " INE002 "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added company 'INE002'"));
    fixture
        .esg()
        .args(["select", "add", "--kind", "company", "INE004"])
        .assert()
        .success();
    assert!(read(&session).contains("INE004"));

    // Duplicate is refused but not an error.
    fixture
        .esg()
        .args(["select", "add", "--kind", "company", "INE004"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already selected"));

    // Compare falls back to the saved company selection.
    fixture
        .esg()
        .args(["--format", "csv", "compare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reliance Industries"))
        .stdout(predicate::str::contains("Infosys"));

    fixture
        .esg()
        .args(["select", "remove", "--kind", "company", "INE002"])
        .assert()
        .success();
    fixture
        .esg()
        .args(["--format", "json", "select", "list", "--kind", "company"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INE004"))
        .stdout(predicate::str::contains("INE002").not());

    fixture.esg().args(["select", "clear"]).assert().success();
    fixture
        .esg()
        .args(["--format", "csv", "select", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INE004").not());
}

#[test]
fn test_select_sector_uses_canonical_label() {
    let fixture = Fixture::new();
    fixture
        .esg()
        .args(["select", "add", "--kind", "sectors", "utilities sector"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added sector 'Utilities'"));

    // Analyze picks up the first saved sector.
    fixture
        .esg()
        .args(["--format", "json", "analyze", "--kind", "sector"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"best_company\": \"Tata Power\""));
}

#[test]
fn test_select_rejects_unknown_kind() {
    Fixture::new()
        .esg()
        .args(["select", "add", "--kind", "bonds", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection kind"));
}

#[test]
fn test_config_file_sets_paths() {
    let fixture = Fixture::new();
    let config = fixture.path("esg.toml");
    fs::write(
        &config,
        format!(
            "companies_file = {:?}\nfunds_file = {:?}\nweighting = \"equal\"\n",
            fixture.path("companies.csv"),
            fixture.path("funds.csv")
        ),
    )
    .unwrap();

    Command::cargo_bin("esg")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "funds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weighting\": \"equal\""))
        .stdout(predicate::str::contains("Green Growth Fund"));
}

#[test]
fn test_missing_data_files_load_empty() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("esg")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("esg.toml"))
        .arg("--companies")
        .arg(dir.path().join("none.csv"))
        .arg("--funds")
        .arg(dir.path().join("none-funds.csv"))
        .args(["--format", "json", "screen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}
