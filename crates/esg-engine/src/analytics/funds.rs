//! Fund allocation normalization and weighted scoring.

use crate::types::{Allocation, FundRecord, FundWeighting};

/// Normalizes an allocation to a 0-100 percentage.
///
/// - `"5%"` / `"1,250%"`: the `%` (and thousands separators) are stripped
///   and the number is taken as-is.
/// - `"5"` / `5.0`: values above 1 are already percentages.
/// - `"0.05"` / `0.05`: values at or below 1 are fractions and scaled by 100.
///
/// Anything unparseable, negative or non-finite normalizes to `0`. The
/// fraction heuristic is lossy: a bare `1` means 100%, not 1%.
///
/// # Examples
///
/// ```
/// use esg_engine::analytics::normalize_allocation;
/// use esg_engine::types::Allocation;
///
/// assert_eq!(normalize_allocation(&Allocation::from("5%")), 5.0);
/// assert_eq!(normalize_allocation(&Allocation::from("5")), 5.0);
/// assert_eq!(normalize_allocation(&Allocation::from(0.05)), 5.0);
/// assert_eq!(normalize_allocation(&Allocation::Missing), 0.0);
/// ```
#[must_use]
pub fn normalize_allocation(allocation: &Allocation) -> f64 {
    let pct = match allocation {
        Allocation::Number(n) => scale_bare(*n),
        Allocation::Text(text) => parse_text(text),
        Allocation::Missing => 0.0,
    };

    if pct.is_finite() && pct > 0.0 {
        pct
    } else {
        0.0
    }
}

fn parse_text(text: &str) -> f64 {
    let text = text.trim();
    if let Some(stripped) = text.strip_suffix('%') {
        return parse_number(stripped).unwrap_or(0.0);
    }
    parse_number(text).map_or(0.0, scale_bare)
}

fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn scale_bare(value: f64) -> f64 {
    if value <= 1.0 {
        value * 100.0
    } else {
        value
    }
}

/// Allocation-weighted mean fund score.
///
/// Falls back to the simple mean of `score` when total allocation is zero,
/// and returns `0` for an empty list.
///
/// # Examples
///
/// ```
/// use esg_engine::analytics::fund_weighted_score;
/// use esg_engine::types::FundRecord;
///
/// let funds = vec![
///     FundRecord::new("Alpha", 80.0, "40%").unwrap(),
///     FundRecord::new("Beta", 60.0, "60%").unwrap(),
/// ];
/// assert!((fund_weighted_score(&funds) - 68.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn fund_weighted_score(funds: &[FundRecord]) -> f64 {
    fund_weighted_score_with(funds, FundWeighting::Allocation)
}

/// Weighted mean fund score under an explicit weighting policy.
#[must_use]
pub fn fund_weighted_score_with(funds: &[FundRecord], weighting: FundWeighting) -> f64 {
    if funds.is_empty() {
        return 0.0;
    }

    if weighting == FundWeighting::Allocation {
        let (weighted, total) = funds.iter().fold((0.0, 0.0), |(sum, total), fund| {
            let w = fund.allocation_pct();
            (sum + fund.score * w, total + w)
        });
        if total > 0.0 {
            return weighted / total;
        }
    }

    funds.iter().map(|f| f.score).sum::<f64>() / funds.len() as f64
}

/// Share of AUM covered by a fund selection, in percent.
///
/// The sum of normalized allocations, capped at 100. Funds without an
/// allocation cover nothing.
#[must_use]
pub fn fund_aum_covered(funds: &[FundRecord]) -> f64 {
    funds
        .iter()
        .map(FundRecord::allocation_pct)
        .sum::<f64>()
        .min(100.0)
}

/// Share of AUM covered by a company selection, in percent.
///
/// Companies carry no AUM of their own and split it equally (`100 / n`
/// each), so any non-empty selection covers 100.
#[must_use]
pub fn company_aum_covered(count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        100.0
    }
}
