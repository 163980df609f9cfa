//! Loads a universe from files and runs analyses over it.

use std::fs;
use std::path::Path;

use esg_engine::prelude::*;
use esg_ext_file::{create_file_record_source, SessionStore};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const COMPANIES: &str = "\
Company Name,Sector,E Pillar,S Pillar,G Pillar,Positive Screen,Negative Screen,Controversy Rating,ESG Rating,ISIN,ESG Pillar,Composite Rating
Tata Power,Utilities,72,68,75,UNGC Signatory,,Low,A,INE001,71.7,74
Reliance Industries,Energy,55,62,70,UNGC Signatory,,Medium,B,INE002,62.3,63
Coal Mining Co,Energy,30,45,55,,Thermal Coal,High,D,INE003,43.3,42
Infosys,IT,80,78,82,UNGC Signatory,,Low,A+,INE004,80,81
Broken Row,IT,80,78,82,,,,,INE005,80,not-a-number
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

#[test]
fn test_universe_from_files() {
    let dir = tempdir().unwrap();
    let companies = write(dir.path(), "companies.csv", COMPANIES);
    let funds = write(dir.path(), "funds.csv", FUNDS);
    let holdings = write(dir.path(), "holdings.csv", HOLDINGS);

    let source = create_file_record_source(&companies, &funds, Some(holdings.as_path())).unwrap();
    let universe = Universe::load(&source).unwrap();

    assert_eq!(universe.companies.len(), 4);
    assert_eq!(universe.funds.len(), 2);
    assert!((fund_weighted_score(&universe.funds) - 67.2).abs() < 1e-9);

    let result = analyze(
        &AnalysisTarget::fund("Balanced Fund"),
        &universe.companies,
        &universe.funds,
        &universe.holdings,
    );
    assert_eq!(result.total_count, 2);
    assert_eq!(result.best_company, "Reliance Industries");
    assert_eq!(result.compliance_rate, 50.0);
}

#[test]
fn test_source_without_holdings() {
    let dir = tempdir().unwrap();
    let companies = write(dir.path(), "companies.csv", COMPANIES);
    let funds = write(dir.path(), "funds.csv", FUNDS);

    let source = create_file_record_source(&companies, &funds, None).unwrap();
    let universe = Universe::load(&source).unwrap();
    assert!(universe.holdings.is_empty());

    let result = analyze(
        &AnalysisTarget::fund("Green Growth Fund"),
        &universe.companies,
        &universe.funds,
        &universe.holdings,
    );
    assert!(result.is_empty());
}

#[test]
fn test_session_round_trip_through_store() {
    let dir = tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));

    let mut selections = store.load();
    selections.set_mut(SelectionKind::Fund).add("Alpha");
    selections.set_mut(SelectionKind::Sector).add("Energy");
    store.save(&selections).unwrap();

    let mut restored = store.load();
    assert!(restored.funds.contains("Alpha"));
    restored.set_mut(SelectionKind::Fund).remove("Alpha");
    store.save(&restored).unwrap();

    let again = store.load();
    assert!(again.funds.is_empty());
    assert!(again.sectors.contains("Energy"));
}
