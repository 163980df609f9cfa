//! Numeric column names understood by [`column_stats`](crate::analytics::column_stats).

/// Composite score (the graded value).
pub const COMPOSITE: &str = "composite";

/// Sector-weighted pillar composite.
pub const ESG_SCORE: &str = "esg_score";

/// Environmental pillar score.
pub const E_SCORE: &str = "e_score";

/// Social pillar score.
pub const S_SCORE: &str = "s_score";

/// Governance pillar score.
pub const G_SCORE: &str = "g_score";

/// Fund-level score.
pub const SCORE: &str = "score";

/// Normalized fund allocation percentage.
pub const ALLOCATION: &str = "allocation";

/// User-declared portfolio weight.
pub const AUM: &str = "aum";

/// All numeric columns of a company record, in display order.
pub const COMPANY_COLUMNS: [&str; 5] = [COMPOSITE, ESG_SCORE, E_SCORE, S_SCORE, G_SCORE];
