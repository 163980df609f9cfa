//! Fund weighting methods.

use serde::{Deserialize, Serialize};

/// Weighting method for fund-level aggregation.
///
/// Determines how individual fund scores are weighted when calculating a
/// combined score across a set of funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundWeighting {
    /// Weight by normalized allocation percentage, falling back to an
    /// equal weight when no fund carries an allocation.
    #[default]
    Allocation,

    /// Equal weight across all funds
    Equal,
}

impl FundWeighting {
    /// Returns a human-readable name for the weighting method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Allocation => "Allocation Weighted",
            Self::Equal => "Equal Weight",
        }
    }
}

impl std::fmt::Display for FundWeighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(FundWeighting::default(), FundWeighting::Allocation);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FundWeighting::Equal), "Equal Weight");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&FundWeighting::Equal).unwrap();
        assert_eq!(json, "\"equal\"");
        let parsed: FundWeighting = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FundWeighting::Equal);
    }
}
