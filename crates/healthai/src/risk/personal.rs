use serde::{Deserialize, Serialize};

use super::level::{RiskLevel, RiskThresholds, SCORE_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ExerciseLevel {
    /// Reported as `none`.
    Inactive,
    Moderate,
    Regular,
    Unrecognized,
}

impl From<&str> for ExerciseLevel {
    fn from(value: &str) -> Self {
        match value {
            "none" => Self::Inactive,
            "moderate" => Self::Moderate,
            "regular" => Self::Regular,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for ExerciseLevel {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum DietQuality {
    Poor,
    Moderate,
    Good,
    Unrecognized,
}

impl From<&str> for DietQuality {
    fn from(value: &str) -> Self {
        match value {
            "poor" => Self::Poor,
            "moderate" => Self::Moderate,
            "good" => Self::Good,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for DietQuality {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Conditions scored by the personal estimator, in base-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalCondition {
    HeartDisease,
    DiabetesType2,
    Hypertension,
    Anemia,
    LungDisease,
    LiverDisease,
}

impl PersonalCondition {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::HeartDisease,
            Self::DiabetesType2,
            Self::Hypertension,
            Self::Anemia,
            Self::LungDisease,
            Self::LiverDisease,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HeartDisease => "Heart Disease",
            Self::DiabetesType2 => "Diabetes Type 2",
            Self::Hypertension => "Hypertension",
            Self::Anemia => "Anemia",
            Self::LungDisease => "Lung Disease",
            Self::LiverDisease => "Liver Disease",
        }
    }

    pub const fn base_score(self) -> u32 {
        match self {
            Self::HeartDisease | Self::DiabetesType2 | Self::Hypertension => 10,
            Self::Anemia | Self::LungDisease | Self::LiverDisease => 5,
        }
    }
}

/// Lifestyle and history answers from the personal risk form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonalProfile {
    #[serde(default = "default_age", deserialize_with = "crate::numeric::int")]
    pub age: i32,
    #[serde(default = "default_gender")]
    pub gender: Gender,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub alcohol: bool,
    #[serde(default = "default_exercise")]
    pub exercise: ExerciseLevel,
    #[serde(default = "default_diet")]
    pub diet: DietQuality,
    #[serde(default)]
    pub bp_history: bool,
    #[serde(default)]
    pub diabetes_history: bool,
    #[serde(default)]
    pub family_history: bool,
}

impl Default for PersonalProfile {
    fn default() -> Self {
        Self {
            age: default_age(),
            gender: default_gender(),
            smoking: false,
            alcohol: false,
            exercise: default_exercise(),
            diet: default_diet(),
            bp_history: false,
            diabetes_history: false,
            family_history: false,
        }
    }
}

fn default_age() -> i32 {
    30
}

fn default_gender() -> Gender {
    Gender::Male
}

fn default_exercise() -> ExerciseLevel {
    ExerciseLevel::Moderate
}

fn default_diet() -> DietQuality {
    DietQuality::Moderate
}

/// Risk factors and the fixed points each one adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    AgeOver45,
    AgeOver60,
    Smoking,
    Alcohol,
    NoExercise,
    PoorDiet,
    BloodPressureHistory,
    DiabetesHistory,
    FamilyHistory,
    YoungFemale,
}

impl RiskFactor {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::AgeOver45,
            Self::AgeOver60,
            Self::Smoking,
            Self::Alcohol,
            Self::NoExercise,
            Self::PoorDiet,
            Self::BloodPressureHistory,
            Self::DiabetesHistory,
            Self::FamilyHistory,
            Self::YoungFemale,
        ]
    }

    pub fn applies_to(self, profile: &PersonalProfile) -> bool {
        match self {
            Self::AgeOver45 => profile.age > 45,
            Self::AgeOver60 => profile.age > 60,
            Self::Smoking => profile.smoking,
            Self::Alcohol => profile.alcohol,
            Self::NoExercise => profile.exercise == ExerciseLevel::Inactive,
            Self::PoorDiet => profile.diet == DietQuality::Poor,
            Self::BloodPressureHistory => profile.bp_history,
            Self::DiabetesHistory => profile.diabetes_history,
            Self::FamilyHistory => profile.family_history,
            Self::YoungFemale => profile.gender == Gender::Female && profile.age < 50,
        }
    }

    pub const fn contributions(self) -> &'static [(PersonalCondition, u32)] {
        use PersonalCondition::*;

        match self {
            Self::AgeOver45 => &[(HeartDisease, 20), (Hypertension, 15)],
            Self::AgeOver60 => &[(DiabetesType2, 10), (HeartDisease, 10)],
            Self::Smoking => &[(LungDisease, 35), (HeartDisease, 25), (Hypertension, 15)],
            Self::Alcohol => &[(LiverDisease, 30), (HeartDisease, 10)],
            Self::NoExercise => &[(HeartDisease, 15), (DiabetesType2, 20), (Hypertension, 10)],
            Self::PoorDiet => &[(DiabetesType2, 15), (Anemia, 10), (Hypertension, 10)],
            Self::BloodPressureHistory => &[(HeartDisease, 20), (Hypertension, 25)],
            Self::DiabetesHistory => &[(DiabetesType2, 30), (HeartDisease, 15)],
            Self::FamilyHistory => &[(HeartDisease, 15), (DiabetesType2, 15)],
            Self::YoungFemale => &[(Anemia, 20)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCondition {
    pub disease: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalRiskReport {
    pub risks: Vec<ScoredCondition>,
    pub overall: u32,
    pub level: RiskLevel,
    pub factors: Vec<RiskFactor>,
}

impl PersonalProfile {
    pub fn estimate(&self) -> PersonalRiskReport {
        let factors: Vec<RiskFactor> = RiskFactor::ordered()
            .into_iter()
            .filter(|factor| factor.applies_to(self))
            .collect();

        let mut raw: Vec<(PersonalCondition, u32)> = PersonalCondition::ordered()
            .into_iter()
            .map(|condition| (condition, condition.base_score()))
            .collect();

        for factor in &factors {
            for &(condition, points) in factor.contributions() {
                if let Some(entry) = raw.iter_mut().find(|(target, _)| *target == condition) {
                    entry.1 += points;
                }
            }
        }

        // Ordering uses the uncapped totals; two capped scores can still differ in rank.
        raw.sort_by(|a, b| b.1.cmp(&a.1));

        let risks: Vec<ScoredCondition> = raw
            .into_iter()
            .map(|(condition, score)| ScoredCondition {
                disease: condition.label(),
                score: score.min(SCORE_CAP),
            })
            .collect();

        let overall = mean_score(&risks);

        PersonalRiskReport {
            risks,
            overall,
            level: RiskThresholds::PERSONAL.classify(overall),
            factors,
        }
    }
}

/// Scores an individual's lifestyle answers against the personal rule table.
#[allow(clippy::too_many_arguments)]
pub fn personal_risk(
    age: i32,
    gender: Gender,
    smoking: bool,
    alcohol: bool,
    exercise: ExerciseLevel,
    diet: DietQuality,
    bp_history: bool,
    diabetes_history: bool,
    family_history: bool,
) -> PersonalRiskReport {
    PersonalProfile {
        age,
        gender,
        smoking,
        alcohol,
        exercise,
        diet,
        bp_history,
        diabetes_history,
        family_history,
    }
    .estimate()
}

fn mean_score(risks: &[ScoredCondition]) -> u32 {
    if risks.is_empty() {
        return 0;
    }
    let total: u32 = risks.iter().map(|risk| risk.score).sum();
    (f64::from(total) / risks.len() as f64).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(report: &PersonalRiskReport, disease: &str) -> u32 {
        report
            .risks
            .iter()
            .find(|risk| risk.disease == disease)
            .map(|risk| risk.score)
            .expect("disease scored")
    }

    #[test]
    fn elderly_smoker_with_bp_history_accumulates_all_brackets() {
        let profile = PersonalProfile {
            age: 70,
            smoking: true,
            bp_history: true,
            ..PersonalProfile::default()
        };

        let report = profile.estimate();

        assert_eq!(score_of(&report, "Heart Disease"), 85);
        assert_eq!(score_of(&report, "Hypertension"), 65);
        assert_eq!(score_of(&report, "Lung Disease"), 40);
        assert_eq!(score_of(&report, "Diabetes Type 2"), 20);
        assert_eq!(report.overall, 37);
        assert_eq!(report.level, RiskLevel::Medium);
        assert_eq!(
            report.factors,
            vec![
                RiskFactor::AgeOver45,
                RiskFactor::AgeOver60,
                RiskFactor::Smoking,
                RiskFactor::BloodPressureHistory,
            ]
        );
    }

    #[test]
    fn baseline_profile_is_low_risk() {
        let report = PersonalProfile::default().estimate();

        let order: Vec<&str> = report.risks.iter().map(|risk| risk.disease).collect();
        assert_eq!(
            order,
            vec![
                "Heart Disease",
                "Diabetes Type 2",
                "Hypertension",
                "Anemia",
                "Lung Disease",
                "Liver Disease",
            ]
        );
        assert_eq!(report.overall, 8);
        assert_eq!(report.level, RiskLevel::Low);
        assert!(report.factors.is_empty());
    }

    #[test]
    fn every_factor_caps_scores_and_classifies_high() {
        let report = personal_risk(
            40,
            Gender::Female,
            true,
            true,
            ExerciseLevel::Inactive,
            DietQuality::Poor,
            true,
            true,
            true,
        );

        assert_eq!(score_of(&report, "Heart Disease"), 95);
        assert_eq!(score_of(&report, "Diabetes Type 2"), 90);
        assert_eq!(score_of(&report, "Anemia"), 35);
        assert_eq!(report.overall, 61);
        assert_eq!(report.level, RiskLevel::High);
    }

    #[test]
    fn ranking_uses_uncapped_totals() {
        let report = personal_risk(
            62,
            Gender::Female,
            false,
            true,
            ExerciseLevel::Inactive,
            DietQuality::Poor,
            false,
            true,
            true,
        );

        assert_eq!(report.risks[0].disease, "Diabetes Type 2");
        assert_eq!(report.risks[1].disease, "Heart Disease");
        assert_eq!(report.risks[0].score, 95);
        assert_eq!(report.risks[1].score, 95);
        assert_eq!(report.overall, 48);
        assert_eq!(report.level, RiskLevel::Medium);
    }

    #[test]
    fn young_female_bump_stops_at_fifty() {
        let young = personal_risk(
            49,
            Gender::Female,
            false,
            false,
            ExerciseLevel::Moderate,
            DietQuality::Moderate,
            false,
            false,
            false,
        );
        let older = personal_risk(
            50,
            Gender::Female,
            false,
            false,
            ExerciseLevel::Moderate,
            DietQuality::Moderate,
            false,
            false,
            false,
        );

        assert_eq!(score_of(&young, "Anemia"), 25);
        assert_eq!(score_of(&older, "Anemia"), 5);
    }

    #[test]
    fn mean_rounds_half_to_even() {
        let risks = |scores: [u32; 2]| -> Vec<ScoredCondition> {
            scores
                .into_iter()
                .map(|score| ScoredCondition {
                    disease: "Anemia",
                    score,
                })
                .collect()
        };
        assert_eq!(mean_score(&risks([30, 31])), 30);
        assert_eq!(mean_score(&risks([31, 32])), 32);
    }

    #[test]
    fn form_defaults_deserialize() {
        let profile: PersonalProfile =
            serde_json::from_str(r#"{"exercise": "none", "gender": "female"}"#)
                .expect("deserializes");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.exercise, ExerciseLevel::Inactive);
        assert_eq!(profile.diet, DietQuality::Moderate);
        assert!(RiskFactor::YoungFemale.applies_to(&profile));
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let profile = PersonalProfile {
            age: 62,
            gender: Gender::Female,
            alcohol: true,
            diet: DietQuality::Poor,
            family_history: true,
            ..PersonalProfile::default()
        };

        let first = profile.estimate();
        assert_eq!(profile.estimate(), first);
        assert_eq!(score_of(&profile.estimate(), "Liver Disease"), score_of(&first, "Liver Disease"));
    }

    #[test]
    fn age_accepts_form_strings() {
        let profile: PersonalProfile =
            serde_json::from_str(r#"{"age": "70", "smoking": true, "bp_history": true}"#)
                .expect("deserializes");
        assert_eq!(profile.age, 70);
        assert_eq!(score_of(&profile.estimate(), "Heart Disease"), 85);
    }
}
