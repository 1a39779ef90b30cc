//! Symptom-to-condition scoring and urgency classification.
//!
//! Free-text symptoms are matched against the canonical symptom table by substring
//! containment in both directions. Matches feed a total-severity accumulator, which
//! drives the urgency tier, and per-condition accumulators, which drive the ranked
//! candidate list.

pub mod domain;
mod engine;
mod first_aid;
pub mod reference;

#[cfg(test)]
mod tests;

pub use domain::{
    RankedCondition, SeverityClass, TriageInputError, TriageRequest, TriageResult, UrgencyTier,
    DISCLAIMER,
};
pub use engine::{triage, SymptomMatch, TriageEngine, MAX_LIKELIHOOD, MAX_RANKED_CONDITIONS};
pub use first_aid::first_aid_tips;
pub use reference::{condition_info, ConditionInfo, SymptomEntry, SYMPTOM_TABLE};
