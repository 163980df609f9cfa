//! Peer and analysis resolution.
//!
//! Given a selected fund, company or sector, derives the population to
//! compare against and feeds it through the aggregation functions:
//!
//! - Fund: the companies it holds (injected via [`HoldingsMap`])
//! - Company: sector peers, excluding the company itself
//! - Sector: every member company
//!
//! [`compare`] builds the highlight table for a hand-picked selection.

mod compare;
mod peers;
mod resolver;

pub use compare::{compare, compare_with, ComparisonCell, ComparisonTable};
pub use peers::{
    canonical_sector, company_peers, fund_holdings, normalize_sector_label, sector_members,
    HoldingsMap,
};
pub use resolver::{
    analyze, headline, resolve_population, AnalysisResult, AnalysisTarget, Headline,
    NOT_AVAILABLE,
};
