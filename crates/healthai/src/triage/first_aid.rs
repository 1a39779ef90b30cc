use super::domain::UrgencyTier;

struct FirstAidRule {
    triggers: &'static [&'static str],
    tips: &'static [&'static str],
}

const EMERGENCY_TIPS: &[&str] = &[
    "Call 108 (India Emergency) immediately",
    "Do NOT leave the patient alone",
    "Keep patient calm and still",
];

const GENERAL_TIPS: &[&str] = &[
    "Rest and stay hydrated",
    "Monitor for worsening symptoms",
    "Avoid self-medication without doctor advice",
];

// Evaluated in order; every rule whose trigger set intersects the symptoms contributes.
const SYMPTOM_RULES: &[FirstAidRule] = &[
    FirstAidRule {
        triggers: &["fever", "high fever"],
        tips: &[
            "Apply cool wet cloth on forehead",
            "Give paracetamol if available (follow dosage)",
            "Ensure adequate fluid intake",
        ],
    },
    FirstAidRule {
        triggers: &["vomiting", "diarrhea", "nausea"],
        tips: &[
            "ORS (Oral Rehydration Solution) every 15-20 mins",
            "Avoid solid food until vomiting stops",
            "Watch for signs of dehydration",
        ],
    },
    FirstAidRule {
        triggers: &["cough", "shortness of breath"],
        tips: &[
            "Keep the patient in upright/sitting position",
            "Ensure good ventilation in the room",
        ],
    },
    FirstAidRule {
        triggers: &["chest pain"],
        tips: &[
            "🚨 Make patient sit/lie comfortably",
            "Loosen tight clothing",
            "Rush to emergency - could be cardiac",
        ],
    },
];

/// First-aid guidance for normalized symptoms. Trigger sets match whole symptom strings.
pub fn first_aid_tips<S: AsRef<str>>(symptoms: &[S], urgency: UrgencyTier) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if urgency == UrgencyTier::Emergency {
        tips.extend_from_slice(EMERGENCY_TIPS);
    }

    for rule in SYMPTOM_RULES {
        let fired = symptoms.iter().any(|symptom| {
            rule.triggers
                .iter()
                .any(|trigger| *trigger == symptom.as_ref())
        });
        if fired {
            tips.extend_from_slice(rule.tips);
        }
    }

    if tips.is_empty() {
        tips.extend_from_slice(GENERAL_TIPS);
    }

    tips
}
