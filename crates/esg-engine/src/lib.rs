//! # ESG Engine
//!
//! Rating aggregation and comparison for ESG (Environmental, Social,
//! Governance) scores.
//!
//! This crate turns per-company pillar scores into letter grades, sector and
//! fund averages, and comparison tables for user-built watchlists.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every aggregation takes its population explicitly
//!   and recomputes on each call. Nothing is cached.
//! - **Total functions**: Empty populations, missing columns and malformed
//!   allocations degrade to zero-valued results, never errors or `NaN`.
//! - **Validated at the boundary**: Records are checked once when built
//!   ([`types::CompanyRecordBuilder`], [`types::FundRecord::new`]) so the
//!   core can trust its inputs.
//! - **Explicit state**: Selections are plain values owned by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use esg_engine::prelude::*;
//!
//! let universe = vec![
//!     CompanyRecord::builder()
//!         .isin("INE001").company_name("Acme Power").sector("Utilities")
//!         .pillars(70.0, 65.0, 80.0).esg_score(71.0).composite(76.0)
//!         .positive_screen("UNGC Signatory")
//!         .build()?,
//!     CompanyRecord::builder()
//!         .isin("INE002").company_name("Grid Corp").sector("Utilities")
//!         .pillars(55.0, 60.0, 58.0).esg_score(57.0).composite(58.0)
//!         .build()?,
//! ];
//!
//! assert_eq!(universe[0].grade(), Grade::APlus);
//!
//! let mut selections = Selections::new();
//! selections.set_mut(SelectionKind::Sector).add("Utilities");
//!
//! let result = analyze(
//!     &AnalysisTarget::sector("utilities"),
//!     &universe,
//!     &[],
//!     &HoldingsMap::new(),
//! );
//! assert_eq!(result.total_count, 2);
//! assert_eq!(result.best_company, "Acme Power");
//! assert_eq!(result.compliance_rate, 50.0);
//! # Ok::<(), esg_engine::EsgError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`grading`] - Composite score to letter grade
//! - [`analytics`] - Column statistics, sector/fund/portfolio aggregation
//! - [`selection`] - Selection sets and portfolio lists
//! - [`analysis`] - Peer resolution, analysis bundles, comparison tables
//! - [`screening`] - Company screener
//! - [`source`] - Data source trait
//! - [`types`] - Records and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod analytics;
pub mod error;
pub mod grading;
pub mod screening;
pub mod selection;
pub mod source;
pub mod types;

// Re-export error types at crate root
pub use error::{EsgError, EsgResult};

// Re-export main types
pub use grading::{grade_of, Grade};
pub use source::{RecordSource, Universe};
pub use types::{
    AnalyticsConfig, Allocation, CompanyRecord, CompanyRecordBuilder, FundRecord,
    FundWeighting, PillarScores, PortfolioEntry,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use esg_engine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analysis::{
        analyze, compare, headline, AnalysisResult, AnalysisTarget, ComparisonTable,
        HoldingsMap,
    };
    pub use crate::analytics::{
        column_stats, company_aum_covered, compliance_rate, extreme_class, extremes,
        fund_aum_covered, fund_weighted_score, mean_of, sector_summary, ExtremeClass, StatsBundle,
    };
    pub use crate::error::{EsgError, EsgResult};
    pub use crate::grading::{grade_of, Grade};
    pub use crate::screening::CompanyFilter;
    pub use crate::selection::{PortfolioList, SelectionKind, SelectionSet, Selections};
    pub use crate::source::{RecordSource, Universe};
    pub use crate::types::{AnalyticsConfig, CompanyRecord, FundRecord, FundWeighting};
}
