//! Population-level summaries: means, compliance and best/worst.

use super::ColumnSource;
use crate::types::CompanyRecord;

/// Mean of a numeric column over a population.
///
/// Records without a finite value for the column are skipped. Returns `0`
/// when nothing remains.
#[must_use]
pub fn mean_of<T: ColumnSource>(records: &[T], field: &str) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.column(field))
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Percentage of companies passing screening (positive screen, no negative).
///
/// Returns `0` for an empty population.
#[must_use]
pub fn compliance_rate<'a, I>(companies: I) -> f64
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let (passed, total) = companies
        .into_iter()
        .fold((0usize, 0usize), |(p, t), c| {
            (p + usize::from(c.passes_screening()), t + 1)
        });

    if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64 * 100.0
    }
}

/// Best and worst companies by composite.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extremes<'a> {
    /// Highest composite, first occurrence on ties.
    pub best: Option<&'a CompanyRecord>,
    /// Lowest composite, first occurrence on ties.
    pub worst: Option<&'a CompanyRecord>,
}

/// Finds the best and worst companies by composite.
///
/// Strict comparisons keep the first occurrence on ties. Both sides are
/// `None` for an empty population.
#[must_use]
pub fn extremes<'a, I>(companies: I) -> Extremes<'a>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut out = Extremes::default();
    for company in companies {
        match out.best {
            Some(best) if company.composite <= best.composite => {}
            _ => out.best = Some(company),
        }
        match out.worst {
            Some(worst) if company.composite >= worst.composite => {}
            _ => out.worst = Some(company),
        }
    }
    out
}
