//! Statistics and aggregation over record populations.
//!
//! Every function here is pure and total: empty populations, missing
//! columns and malformed allocations produce zero-valued results rather
//! than errors or `NaN`.
//!
//! - [`column_stats`] / [`extreme_class`] / [`heat_band`]: per-column
//!   statistics and cell classification
//! - [`sector_summary`] / [`sector_breakdown`]: sector aggregation
//! - [`fund_weighted_score`]: allocation-weighted fund average
//! - [`fund_aum_covered`] / [`company_aum_covered`]: AUM coverage of a selection
//! - [`mean_of`] / [`compliance_rate`] / [`extremes`]: population summaries

mod funds;
mod sector;
mod stats;
mod summary;

pub use funds::{
    company_aum_covered, fund_aum_covered, fund_weighted_score, fund_weighted_score_with,
    normalize_allocation,
};
pub use sector::{sector_breakdown, sector_summary, SectorBreakdownEntry, SectorSummary};
pub use stats::{
    column_stats, extreme_class, heat_band, ColumnSource, ColumnStat, ExtremeClass, HeatBand,
    StatsBundle,
};
pub use summary::{compliance_rate, extremes, mean_of, Extremes};
