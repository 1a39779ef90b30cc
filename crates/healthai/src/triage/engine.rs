use std::collections::HashMap;

use tracing::debug;

use super::domain::{RankedCondition, TriageRequest, TriageResult, UrgencyTier, DISCLAIMER};
use super::first_aid::first_aid_tips;
use super::reference::{condition_info, SymptomEntry, SYMPTOM_TABLE};

/// Upper bound on ranked conditions returned in a result.
pub const MAX_RANKED_CONDITIONS: usize = 5;
/// Likelihood ceiling; a percentage never claims certainty.
pub const MAX_LIKELIHOOD: u8 = 95;

/// Accumulated matches for one request, before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomMatch {
    /// Trimmed, lower-cased input symptoms in request order.
    pub normalized: Vec<String>,
    /// Sum of the weights of every matched canonical key (with repeats).
    pub total_severity: u32,
    /// Condition scores in first-seen order.
    pub condition_scores: Vec<(&'static str, u32)>,
}

impl SymptomMatch {
    pub fn score_for(&self, condition: &str) -> Option<u32> {
        self.condition_scores
            .iter()
            .find(|(name, _)| *name == condition)
            .map(|(_, score)| *score)
    }

    /// Conditions by descending score, ties kept in first-seen order, capped at five.
    pub fn ranked(&self) -> Vec<(&'static str, u32)> {
        let mut ranked = self.condition_scores.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(MAX_RANKED_CONDITIONS);
        ranked
    }
}

/// Stateless evaluator over a symptom reference table.
#[derive(Debug, Clone, Copy)]
pub struct TriageEngine {
    symptoms: &'static [SymptomEntry],
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl TriageEngine {
    pub const fn standard() -> Self {
        Self::with_table(SYMPTOM_TABLE)
    }

    pub const fn with_table(symptoms: &'static [SymptomEntry]) -> Self {
        Self { symptoms }
    }

    pub fn match_symptoms<S: AsRef<str>>(&self, symptoms: &[S]) -> SymptomMatch {
        let normalized: Vec<String> = symptoms
            .iter()
            .map(|symptom| symptom.as_ref().trim().to_lowercase())
            .collect();

        let mut total_severity = 0u32;
        let mut condition_scores: Vec<(&'static str, u32)> = Vec::new();
        let mut positions: HashMap<&'static str, usize> = HashMap::new();

        for symptom in &normalized {
            for entry in self.symptoms {
                if !(symptom.contains(entry.key) || entry.key.contains(symptom.as_str())) {
                    continue;
                }

                for &condition in entry.conditions {
                    match positions.get(condition) {
                        Some(&index) => condition_scores[index].1 += entry.severity_weight,
                        None => {
                            positions.insert(condition, condition_scores.len());
                            condition_scores.push((condition, entry.severity_weight));
                        }
                    }
                }
                total_severity += entry.severity_weight;
            }
        }

        SymptomMatch {
            normalized,
            total_severity,
            condition_scores,
        }
    }

    pub fn assess<S: AsRef<str>>(&self, symptoms: &[S], age: i32) -> TriageResult {
        let matched = self.match_symptoms(symptoms);
        let base = UrgencyTier::from_total_severity(matched.total_severity);

        let mut urgency = base;
        let mut action = base.action().to_string();
        if (age < 5 || age > 65) && base != base.escalated() {
            urgency = base.escalated();
            action = format!("⚠️ Given patient age ({age}), extra caution recommended. {action}");
        }

        debug!(
            total_severity = matched.total_severity,
            matched_conditions = matched.condition_scores.len(),
            urgency = urgency.label(),
            "symptom triage scored"
        );

        let conditions = matched
            .ranked()
            .into_iter()
            .map(|(name, score)| {
                let info = condition_info(name);
                RankedCondition {
                    name,
                    likelihood: likelihood(score, matched.total_severity),
                    severity: info.severity,
                    description: info.description,
                }
            })
            .collect();

        TriageResult {
            urgency,
            urgency_color: base.color(),
            action,
            conditions,
            first_aid: first_aid_tips(&matched.normalized, urgency),
            disclaimer: DISCLAIMER,
        }
    }

    pub fn assess_request(&self, request: &TriageRequest) -> TriageResult {
        self.assess(&request.symptoms, request.age)
    }
}

/// Scores the symptoms against the standard reference table.
pub fn triage<S: AsRef<str>>(symptoms: &[S], age: i32) -> TriageResult {
    TriageEngine::standard().assess(symptoms, age)
}

fn likelihood(score: u32, total_severity: u32) -> u8 {
    let pct = f64::from(score) / f64::from(total_severity.max(1)) * 100.0;
    pct.round_ties_even().clamp(0.0, f64::from(MAX_LIKELIHOOD)) as u8
}
