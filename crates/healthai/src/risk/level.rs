use serde::{Deserialize, Serialize};

/// Ceiling applied to every risk score.
pub const SCORE_CAP: u32 = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Inclusive lower bounds for the HIGH and MEDIUM levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    pub high: u32,
    pub medium: u32,
}

impl RiskThresholds {
    /// Used for community outbreak scores.
    pub const REGIONAL: Self = Self {
        high: 60,
        medium: 35,
    };
    /// Used for an individual's overall lifestyle score.
    pub const PERSONAL: Self = Self {
        high: 50,
        medium: 30,
    };

    pub const fn classify(self, score: u32) -> RiskLevel {
        if score >= self.high {
            RiskLevel::High
        } else if score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
