const NO_SUGGESTION: &[&str] = &["Consult a doctor for appropriate medication"];

/// Over-the-counter suggestions keyed by exact condition name.
pub fn medicine_suggestions(condition: &str) -> &'static [&'static str] {
    match condition {
        "Common Cold" => &[
            "Paracetamol (500mg)",
            "Vitamin C supplements",
            "Steam inhalation",
            "Antihistamine (if runny nose)",
        ],
        "Flu" => &[
            "Paracetamol (500mg) every 6 hrs",
            "Rest and fluids",
            "ORS if sweating heavily",
            "Consult doctor for antivirals",
        ],
        "Malaria" => &[
            "⚠️ Prescription needed - visit doctor immediately",
            "Do NOT self-medicate with chloroquine without test",
        ],
        "Dengue" => &[
            "Paracetamol ONLY (avoid ibuprofen/aspirin)",
            "ORS every hour",
            "Platelet monitoring required",
        ],
        "Migraine" => &[
            "Ibuprofen 400mg or Paracetamol",
            "Rest in dark quiet room",
            "Cold compress on head",
        ],
        "Gastroenteritis" => &[
            "ORS after every loose motion",
            "Zinc tablets (10 days for children)",
            "Avoid dairy temporarily",
        ],
        "Food Poisoning" => &[
            "ORS every 15-20 mins",
            "Activated charcoal (if available)",
            "Avoid solid food for 6 hours",
        ],
        "Asthma" => &[
            "Use prescribed inhaler immediately",
            "Sit upright, breathe slowly",
            "Avoid triggers",
        ],
        "Allergy" => &[
            "Cetirizine 10mg (antihistamine)",
            "Avoid allergen",
            "Calamine lotion for skin rash",
        ],
        "Vertigo" => &[
            "Betahistine (consult pharmacist)",
            "Rest, avoid sudden movements",
            "Ginger tea may help",
        ],
        "Anemia" => &[
            "Iron + Folic acid supplements",
            "Eat iron-rich foods (spinach, lentils)",
            "Vitamin C with iron for absorption",
        ],
        _ => NO_SUGGESTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dengue_warns_against_nsaids() {
        assert!(medicine_suggestions("Dengue")[0].contains("avoid ibuprofen"));
    }

    #[test]
    fn lookups_are_exact() {
        assert_eq!(medicine_suggestions("dengue"), NO_SUGGESTION);
        assert_eq!(medicine_suggestions(""), NO_SUGGESTION);
    }
}
