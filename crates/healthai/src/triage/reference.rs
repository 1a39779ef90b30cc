//! Immutable symptom and condition reference tables.

use super::domain::SeverityClass;

/// Canonical symptom key with the conditions it points at and its severity weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomEntry {
    pub key: &'static str,
    pub conditions: &'static [&'static str],
    pub severity_weight: u32,
}

const fn symptom(
    key: &'static str,
    conditions: &'static [&'static str],
    severity_weight: u32,
) -> SymptomEntry {
    SymptomEntry {
        key,
        conditions,
        severity_weight,
    }
}

/// Canonical symptoms in matching order. Order drives condition tie-breaks.
pub static SYMPTOM_TABLE: &[SymptomEntry] = &[
    symptom(
        "fever",
        &["Common Cold", "Flu", "Malaria", "Dengue", "Typhoid"],
        2,
    ),
    symptom(
        "cough",
        &["Common Cold", "Flu", "Bronchitis", "Tuberculosis", "COVID-19"],
        2,
    ),
    symptom(
        "headache",
        &["Migraine", "Tension Headache", "Dengue", "Hypertension", "Sinusitis"],
        1,
    ),
    symptom(
        "chest pain",
        &["Angina", "Heart Attack", "Pneumonia", "Anxiety", "GERD"],
        5,
    ),
    symptom(
        "shortness of breath",
        &["Asthma", "Pneumonia", "Heart Failure", "COVID-19", "Anemia"],
        5,
    ),
    symptom(
        "fatigue",
        &["Anemia", "Diabetes", "Thyroid Disorder", "Depression", "Malaria"],
        1,
    ),
    symptom(
        "nausea",
        &["Gastroenteritis", "Food Poisoning", "Migraine", "Pregnancy", "Appendicitis"],
        2,
    ),
    symptom(
        "vomiting",
        &["Gastroenteritis", "Food Poisoning", "Appendicitis", "Migraine"],
        3,
    ),
    symptom(
        "diarrhea",
        &["Gastroenteritis", "Food Poisoning", "Cholera", "IBS", "Typhoid"],
        3,
    ),
    symptom(
        "abdominal pain",
        &["Appendicitis", "Gastritis", "IBS", "Kidney Stones", "Peptic Ulcer"],
        3,
    ),
    symptom(
        "rash",
        &["Dengue", "Chickenpox", "Allergy", "Measles", "Typhoid"],
        2,
    ),
    symptom(
        "joint pain",
        &["Arthritis", "Dengue", "Chikungunya", "Gout", "Lupus"],
        2,
    ),
    symptom(
        "back pain",
        &["Muscle Strain", "Kidney Infection", "Herniated Disc", "Osteoporosis"],
        2,
    ),
    symptom(
        "dizziness",
        &["Vertigo", "Low Blood Pressure", "Anemia", "Dehydration", "Inner Ear Infection"],
        2,
    ),
    symptom(
        "sore throat",
        &["Strep Throat", "Tonsillitis", "Common Cold", "Flu"],
        1,
    ),
    symptom(
        "runny nose",
        &["Common Cold", "Flu", "Allergic Rhinitis", "Sinusitis"],
        1,
    ),
    symptom(
        "high fever",
        &["Malaria", "Dengue", "Typhoid", "Sepsis", "Severe Flu"],
        4,
    ),
    symptom(
        "unconscious",
        &["Stroke", "Heart Attack", "Severe Hypoglycemia", "Seizure", "Severe Dehydration"],
        10,
    ),
    symptom(
        "blurred vision",
        &["Diabetes", "Hypertension", "Migraine", "Glaucoma", "Stroke"],
        4,
    ),
    symptom(
        "swelling",
        &["Heart Failure", "Kidney Disease", "Liver Disease", "DVT", "Allergy"],
        3,
    ),
];

/// Severity class and description for a named condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub severity: SeverityClass,
    pub description: &'static str,
}

const UNKNOWN_CONDITION: ConditionInfo = ConditionInfo {
    severity: SeverityClass::Unknown,
    description: "Consult a doctor for accurate diagnosis",
};

static CONDITION_TABLE: &[(&str, SeverityClass, &str)] = &[
    ("Common Cold", SeverityClass::Mild, "Viral infection of upper respiratory tract"),
    ("Flu", SeverityClass::Moderate, "Influenza - contagious respiratory illness"),
    ("Malaria", SeverityClass::Severe, "Mosquito-borne parasitic infection - needs immediate attention"),
    ("Dengue", SeverityClass::Severe, "Mosquito-borne fever - monitor for warning signs"),
    ("Typhoid", SeverityClass::Severe, "Bacterial infection spread through contaminated food/water"),
    ("Tuberculosis", SeverityClass::Severe, "Bacterial lung infection - requires long-term treatment"),
    ("Bronchitis", SeverityClass::Moderate, "Inflammation of bronchial tubes"),
    ("COVID-19", SeverityClass::Severe, "Coronavirus infection - isolate and consult doctor"),
    ("Migraine", SeverityClass::Moderate, "Severe recurring headaches often with nausea"),
    ("Heart Attack", SeverityClass::Emergency, "EMERGENCY - Call ambulance immediately"),
    ("Stroke", SeverityClass::Emergency, "EMERGENCY - Call ambulance immediately"),
    ("Pneumonia", SeverityClass::Severe, "Lung infection - needs immediate medical attention"),
    ("Appendicitis", SeverityClass::Emergency, "EMERGENCY - Requires immediate surgery"),
    ("Asthma", SeverityClass::Moderate, "Chronic airway inflammation - use inhaler if prescribed"),
    ("Anemia", SeverityClass::Moderate, "Low blood iron/hemoglobin - diet and supplements needed"),
    ("Diabetes", SeverityClass::Moderate, "Blood sugar regulation disorder - needs monitoring"),
    ("Gastroenteritis", SeverityClass::Mild, "Stomach bug - rest and hydration recommended"),
    ("Food Poisoning", SeverityClass::Moderate, "Foodborne illness - hydration is key"),
    ("Cholera", SeverityClass::Severe, "Severe bacterial diarrhea - needs immediate rehydration"),
    ("Chickenpox", SeverityClass::Moderate, "Viral infection with itchy rash - isolate from others"),
    ("Arthritis", SeverityClass::Moderate, "Joint inflammation - physiotherapy and medication needed"),
    ("Vertigo", SeverityClass::Moderate, "Balance disorder - avoid sudden movements"),
    ("Hypertension", SeverityClass::Moderate, "High blood pressure - lifestyle changes and medication"),
    ("Allergy", SeverityClass::Mild, "Immune response to allergens - antihistamines may help"),
];

/// Looks up a condition, falling back to the `unknown` class for names outside the table.
pub fn condition_info(name: &str) -> ConditionInfo {
    CONDITION_TABLE
        .iter()
        .find(|(candidate, _, _)| *candidate == name)
        .map(|&(_, severity, description)| ConditionInfo {
            severity,
            description,
        })
        .unwrap_or(UNKNOWN_CONDITION)
}
