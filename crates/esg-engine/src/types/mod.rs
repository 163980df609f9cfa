//! Core types for the ESG engine.
//!
//! - [`CompanyRecord`]: A rated company (pillars, composite, screens)
//! - [`FundRecord`]: A rated fund with its allocation
//! - [`PortfolioEntry`]: A company in a user-curated list
//! - [`AnalyticsConfig`]: Presentation-facing computation settings

pub mod columns;
mod company;
mod config;
mod fund;
mod portfolio;
mod weighting;

pub use company::{is_blank_screen, CompanyRecord, CompanyRecordBuilder, PillarScores, UNKNOWN_SECTOR};
pub use config::{AnalyticsConfig, DEFAULT_TOP_SECTORS};
pub use fund::{Allocation, FundRecord};
pub use portfolio::PortfolioEntry;
pub use weighting::FundWeighting;
