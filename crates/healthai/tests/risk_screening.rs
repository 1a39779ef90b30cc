use healthai::risk::{
    outbreak_risk, personal_risk, DietQuality, ExerciseLevel, Gender, OutbreakConditions,
    PersonalProfile, RiskFactor, RiskLevel, Sanitation, Season, WaterSource, SCORE_CAP,
};
use healthai::wellness::calculate_bmi;

#[test]
fn monsoon_with_unsafe_water_flags_waterborne_disease() {
    let risks = outbreak_risk(Season::Monsoon, Sanitation::Poor, WaterSource::Pond, 40.0);

    let ranked: Vec<_> = risks.iter().map(|risk| (risk.disease, risk.score)).collect();
    assert_eq!(
        ranked,
        [("Cholera", 85), ("Typhoid", 75), ("COVID", 70), ("Malaria", 45), ("Dengue", 45)]
    );
    assert!(risks.iter().all(|risk| risk.score <= SCORE_CAP));
    assert_eq!(risks[0].level, RiskLevel::High);
    assert_eq!(risks[4].level, RiskLevel::Medium);
}

#[test]
fn outbreak_request_body_falls_back_to_defaults() {
    let conditions: OutbreakConditions =
        serde_json::from_str(r#"{"region": "Guntur", "season": "autumn"}"#).expect("parses");

    assert_eq!(conditions.region, "Guntur");
    assert_eq!(conditions.sanitation, Sanitation::Moderate);
    let risks = conditions.estimate();
    assert!(risks.iter().all(|risk| risk.level == RiskLevel::Low));
}

#[test]
fn elderly_smoker_with_hypertension_history() {
    let report = personal_risk(
        70,
        Gender::Male,
        true,
        false,
        ExerciseLevel::Moderate,
        DietQuality::Moderate,
        true,
        false,
        false,
    );

    assert_eq!(report.risks[0].disease, "Heart Disease");
    assert_eq!(report.risks[0].score, 85);
    assert_eq!(report.overall, 37);
    assert_eq!(report.level, RiskLevel::Medium);
    assert!(report.factors.contains(&RiskFactor::Smoking));
}

#[test]
fn default_profile_is_low_risk() {
    let report = PersonalProfile::default().estimate();
    assert_eq!(report.overall, 8);
    assert_eq!(report.level, RiskLevel::Low);
    assert!(report.factors.is_empty());
}

#[test]
fn obese_adult_gets_weight_management_advice() {
    let report = calculate_bmi(110.0, 165.0).expect("valid measurements");
    assert_eq!(report.category, "Obese");
    assert_eq!(report.color, "#dc2626");
    assert!(report.advice[0].contains("weight management"));
}
