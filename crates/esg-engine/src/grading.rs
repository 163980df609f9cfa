//! Letter grading of composite ESG scores.
//!
//! - [`Grade`]: The seven-notch letter scale (A+ to D)
//! - [`grade_of`]: Deterministic mapping from a composite score to a grade
//!
//! Thresholds are evaluated top-down and the first match wins:
//!
//! | Composite | Grade |
//! |-----------|-------|
//! | `> 75`    | A+    |
//! | `>= 70`   | A     |
//! | `>= 65`   | B+    |
//! | `>= 60`   | B     |
//! | `>= 55`   | C+    |
//! | `>= 50`   | C     |
//! | otherwise | D     |
//!
//! The legend ranges shown by [`Grade::score_range`] are display labels
//! only. They are not used to compute grades.

use serde::{Deserialize, Serialize};

/// Letter grade derived from a composite score.
///
/// Ordering follows quality: `D < C < C+ < B < B+ < A < A+`.
///
/// # Examples
///
/// ```
/// use esg_engine::grading::{grade_of, Grade};
///
/// assert_eq!(grade_of(75.0), Grade::A);
/// assert_eq!(grade_of(75.01), Grade::APlus);
/// assert!(Grade::APlus > Grade::A);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Grade {
    /// Nascent
    #[default]
    #[serde(rename = "D")]
    D = 0,
    /// Basic
    #[serde(rename = "C")]
    C = 1,
    /// Average
    #[serde(rename = "C+")]
    CPlus = 2,
    /// Progressing
    #[serde(rename = "B")]
    B = 3,
    /// Good
    #[serde(rename = "B+")]
    BPlus = 4,
    /// Advanced
    #[serde(rename = "A")]
    A = 5,
    /// Leadership
    #[serde(rename = "A+")]
    APlus = 6,
}

/// Lower bounds for each grade, best first.
///
/// `A+` uses a strict comparison; every other bound is inclusive.
pub const GRADE_THRESHOLDS: [(Grade, f64); 6] = [
    (Grade::APlus, 75.0),
    (Grade::A, 70.0),
    (Grade::BPlus, 65.0),
    (Grade::B, 60.0),
    (Grade::CPlus, 55.0),
    (Grade::C, 50.0),
];

/// Maps a composite score to its letter grade.
///
/// Non-finite inputs (`NaN`, infinities) are treated as `0` and grade `D`.
#[must_use]
pub fn grade_of(composite: f64) -> Grade {
    let score = if composite.is_finite() { composite } else { 0.0 };

    for (grade, bound) in GRADE_THRESHOLDS {
        let hit = if grade == Grade::APlus {
            score > bound
        } else {
            score >= bound
        };
        if hit {
            return grade;
        }
    }
    Grade::D
}

impl Grade {
    /// Returns the rank (0 = D, 6 = A+). Higher is better.
    #[must_use]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label (e.g. "B+").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Returns the performance category for this grade.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::APlus => "Leadership",
            Self::A => "Advanced",
            Self::BPlus => "Good",
            Self::B => "Progressing",
            Self::CPlus => "Average",
            Self::C => "Basic",
            Self::D => "Nascent",
        }
    }

    /// Returns the legend score range for this grade.
    #[must_use]
    pub fn score_range(&self) -> &'static str {
        match self {
            Self::APlus => ">75",
            Self::A => "70-74",
            Self::BPlus => "65-69",
            Self::B => "60-64",
            Self::CPlus => "55-59",
            Self::C => "50-54",
            Self::D => "<50",
        }
    }

    /// Parses a grade label. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    /// Returns all grades, best first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::APlus,
            Self::A,
            Self::BPlus,
            Self::B,
            Self::CPlus,
            Self::C,
            Self::D,
        ]
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
