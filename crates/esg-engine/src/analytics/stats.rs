//! Column statistics and extreme classification.
//!
//! [`column_stats`] computes min/max/mean per numeric column in one pass
//! over a population. The resulting [`StatsBundle`] then classifies any
//! cell in constant time via [`extreme_class`] and [`heat_band`], so
//! highlighting a table never rescans the population per cell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Access to named numeric columns of a record.
///
/// Returns `None` for unknown columns. Non-finite values returned by an
/// implementation are treated as missing by [`column_stats`].
pub trait ColumnSource {
    /// Returns the value of the named column, if the record has one.
    fn column(&self, name: &str) -> Option<f64>;
}

impl<T: ColumnSource + ?Sized> ColumnSource for &T {
    fn column(&self, name: &str) -> Option<f64> {
        (**self).column(name)
    }
}

/// Min, max and mean of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStat {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Number of valid values the stat was computed from.
    pub count: usize,
}

impl ColumnStat {
    /// Returns `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if the column has more than one distinct value.
    #[must_use]
    pub fn has_variation(&self) -> bool {
        self.max != self.min
    }
}

/// Statistics for a set of columns over one population.
///
/// Columns without a single valid value are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsBundle {
    columns: BTreeMap<String, ColumnStat>,
}

impl StatsBundle {
    /// Returns the stat for a column, if it had any valid value.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&ColumnStat> {
        self.columns.get(column)
    }

    /// Returns true if the column is present.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Returns the number of columns with stats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no column had a valid value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over columns in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStat)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Computes min/max/mean for each requested column.
///
/// Missing and non-finite values are excluded from a column's computation
/// rather than counted as zero. Columns with no valid value are omitted.
#[must_use]
pub fn column_stats<T: ColumnSource>(records: &[T], columns: &[&str]) -> StatsBundle {
    let mut out = BTreeMap::new();

    for &column in columns {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for value in records
            .iter()
            .filter_map(|r| r.column(column))
            .filter(|v| v.is_finite())
        {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }

        if count > 0 {
            out.insert(
                column.to_string(),
                ColumnStat {
                    min,
                    max,
                    mean: sum / count as f64,
                    count,
                },
            );
        }
    }

    StatsBundle { columns: out }
}

/// Position of a value relative to its column's extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremeClass {
    /// Exactly equal to the column maximum.
    Max,
    /// Exactly equal to the column minimum.
    Min,
    /// Anything else.
    Mid,
}

/// Classifies a value as the column maximum, minimum or neither.
///
/// Uses exact equality, so every record sharing the extreme value is
/// classified alike. A column without variation, an absent column or a
/// non-finite value all yield [`ExtremeClass::Mid`].
#[must_use]
pub fn extreme_class(column: &str, value: f64, stats: &StatsBundle) -> ExtremeClass {
    let Some(stat) = stats.get(column) else {
        return ExtremeClass::Mid;
    };
    if !value.is_finite() || !stat.has_variation() {
        return ExtremeClass::Mid;
    }

    if value == stat.max {
        ExtremeClass::Max
    } else if value == stat.min {
        ExtremeClass::Min
    } else {
        ExtremeClass::Mid
    }
}

/// Graded emphasis for a value based on where it sits within [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatBand {
    /// Top fifth of the range.
    StrongHigh,
    /// Upper part of the range.
    High,
    /// Middle of the range.
    Neutral,
    /// Lower part of the range.
    Low,
    /// Bottom fifth of the range.
    StrongLow,
}

/// Classifies a value by its relative position `p = (v - min) / (max - min)`.
///
/// A column without variation places every value at `p = 0.5`. Returns
/// `None` for non-finite values or absent columns.
#[must_use]
pub fn heat_band(column: &str, value: f64, stats: &StatsBundle) -> Option<HeatBand> {
    let stat = stats.get(column)?;
    if !value.is_finite() {
        return None;
    }

    let span = stat.span();
    let p = if span == 0.0 {
        0.5
    } else {
        (value - stat.min) / span
    };

    let band = if p >= 0.8 {
        HeatBand::StrongHigh
    } else if p >= 0.6 {
        HeatBand::High
    } else if p <= 0.2 {
        HeatBand::StrongLow
    } else if p <= 0.4 {
        HeatBand::Low
    } else {
        HeatBand::Neutral
    };
    Some(band)
}
