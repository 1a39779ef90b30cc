use crate::triage::{TriageEngine, TriageResult};

pub(super) fn assess(symptoms: &[&str], age: i32) -> TriageResult {
    TriageEngine::standard().assess(symptoms, age)
}

pub(super) fn condition_names(result: &TriageResult) -> Vec<&'static str> {
    result
        .conditions
        .iter()
        .map(|condition| condition.name)
        .collect()
}

pub(super) const FEVER_TIPS: [&str; 3] = [
    "Apply cool wet cloth on forehead",
    "Give paracetamol if available (follow dosage)",
    "Ensure adequate fluid intake",
];

pub(super) const GENERAL_TIPS: [&str; 3] = [
    "Rest and stay hydrated",
    "Monitor for worsening symptoms",
    "Avoid self-medication without doctor advice",
];
