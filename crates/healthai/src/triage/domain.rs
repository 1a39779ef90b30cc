use serde::{Deserialize, Serialize};

pub const DISCLAIMER: &str = "⚠️ This is an AI-assisted preliminary assessment ONLY. Always consult a qualified healthcare professional for proper diagnosis and treatment.";

const DEFAULT_AGE: i32 = 30;
const DEFAULT_DURATION: &str = "1-2 days";

/// Urgency tier derived from the accumulated symptom severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    Low,
    Moderate,
    High,
    Emergency,
}

impl UrgencyTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::Emergency]
    }

    pub const fn from_total_severity(total_severity: u32) -> Self {
        if total_severity >= 10 {
            Self::Emergency
        } else if total_severity >= 6 {
            Self::High
        } else if total_severity >= 3 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Emergency => "EMERGENCY",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#16a34a",
            Self::Moderate => "#d97706",
            Self::High => "#ea580c",
            Self::Emergency => "#dc2626",
        }
    }

    pub const fn action(self) -> &'static str {
        match self {
            Self::Low => "💊 Rest at home, monitor symptoms. Visit clinic if worsening",
            Self::Moderate => "📋 Visit a clinic within 24-48 hours",
            Self::High => "⚠️ Visit a hospital/doctor TODAY - Do not delay",
            Self::Emergency => "🚨 Go to Emergency Room IMMEDIATELY or call 108",
        }
    }

    /// One-tier bump applied for very young or elderly patients. Only LOW and MODERATE move.
    pub const fn escalated(self) -> Self {
        match self {
            Self::Low => Self::Moderate,
            Self::Moderate => Self::High,
            other => other,
        }
    }
}

/// Severity class attached to a candidate condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityClass {
    Mild,
    Moderate,
    Severe,
    Emergency,
    Unknown,
}

impl SeverityClass {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Emergency => "emergency",
            Self::Unknown => "unknown",
        }
    }
}

/// Parsed symptom-check request. `duration` and `additional` are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default = "default_age", deserialize_with = "crate::numeric::int")]
    pub age: i32,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default)]
    pub additional: String,
}

impl TriageRequest {
    pub fn new<I, S>(symptoms: I, age: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            age,
            duration: default_duration(),
            additional: String::new(),
        }
    }

    /// Rejects requests the engine must never see.
    pub fn validate(&self) -> Result<(), TriageInputError> {
        if self.symptoms.is_empty() {
            return Err(TriageInputError::MissingSymptoms);
        }
        Ok(())
    }
}

fn default_age() -> i32 {
    DEFAULT_AGE
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageInputError {
    #[error("Please provide at least one symptom")]
    MissingSymptoms,
}

/// Candidate condition with its display likelihood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCondition {
    pub name: &'static str,
    pub likelihood: u8,
    #[serde(rename = "type")]
    pub severity: SeverityClass,
    pub description: &'static str,
}

/// Full triage assessment returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageResult {
    pub urgency: UrgencyTier,
    pub urgency_color: &'static str,
    pub action: String,
    pub conditions: Vec<RankedCondition>,
    pub first_aid: Vec<&'static str>,
    pub disclaimer: &'static str,
}
