use serde::{Deserialize, Serialize};

use super::level::{RiskLevel, RiskThresholds, SCORE_CAP};

/// Season reported for a region. Unrecognised values apply no seasonal adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    PostMonsoon,
    Unrecognized,
}

impl Season {
    pub const fn is_rainy(self) -> bool {
        matches!(self, Self::Monsoon | Self::PostMonsoon)
    }
}

impl From<&str> for Season {
    fn from(value: &str) -> Self {
        match value {
            "summer" => Self::Summer,
            "winter" => Self::Winter,
            "monsoon" => Self::Monsoon,
            "post-monsoon" => Self::PostMonsoon,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for Season {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Sanitation {
    Poor,
    Moderate,
    Good,
    Unrecognized,
}

impl From<&str> for Sanitation {
    fn from(value: &str) -> Self {
        match value {
            "poor" => Self::Poor,
            "moderate" => Self::Moderate,
            "good" => Self::Good,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for Sanitation {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum WaterSource {
    River,
    Pond,
    Unfiltered,
    Tap,
    Unrecognized,
}

impl WaterSource {
    /// Surface or untreated sources that raise waterborne disease risk.
    pub const fn is_unsafe(self) -> bool {
        matches!(self, Self::River | Self::Pond | Self::Unfiltered)
    }
}

impl From<&str> for WaterSource {
    fn from(value: &str) -> Self {
        match value {
            "river" => Self::River,
            "pond" => Self::Pond,
            "unfiltered" => Self::Unfiltered,
            "tap" => Self::Tap,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for WaterSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Diseases tracked by the outbreak estimator, in base-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutbreakDisease {
    Malaria,
    Dengue,
    Cholera,
    Typhoid,
    Covid,
}

impl OutbreakDisease {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Malaria,
            Self::Dengue,
            Self::Cholera,
            Self::Typhoid,
            Self::Covid,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Malaria => "Malaria",
            Self::Dengue => "Dengue",
            Self::Cholera => "Cholera",
            Self::Typhoid => "Typhoid",
            Self::Covid => "COVID",
        }
    }

    pub const fn base_score(self) -> u32 {
        match self {
            Self::Cholera | Self::Covid => 20,
            Self::Malaria | Self::Dengue | Self::Typhoid => 10,
        }
    }

    const fn is_mosquito_borne(self) -> bool {
        matches!(self, Self::Malaria | Self::Dengue)
    }

    const fn is_waterborne(self) -> bool {
        matches!(self, Self::Cholera | Self::Typhoid)
    }
}

/// Environmental and behavioural snapshot of a region.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutbreakConditions {
    #[serde(default)]
    pub region: String,
    #[serde(default = "default_season")]
    pub season: Season,
    #[serde(default = "default_sanitation")]
    pub sanitation: Sanitation,
    #[serde(default = "default_water_source")]
    pub water_source: WaterSource,
    #[serde(default = "default_vaccination_rate", deserialize_with = "crate::numeric::float")]
    pub vaccination_rate: f64,
}

impl OutbreakConditions {
    pub fn estimate(&self) -> Vec<DiseaseRisk> {
        outbreak_risk(
            self.season,
            self.sanitation,
            self.water_source,
            self.vaccination_rate,
        )
    }
}

fn default_season() -> Season {
    Season::Summer
}

fn default_sanitation() -> Sanitation {
    Sanitation::Moderate
}

fn default_water_source() -> WaterSource {
    WaterSource::Tap
}

fn default_vaccination_rate() -> f64 {
    70.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseRisk {
    pub disease: &'static str,
    pub score: u32,
    pub level: RiskLevel,
}

/// Scores every tracked disease for a region, highest risk first.
///
/// The vaccination rate is truncated to a whole percentage before the `< 60` check.
pub fn outbreak_risk(
    season: Season,
    sanitation: Sanitation,
    water_source: WaterSource,
    vaccination_rate: f64,
) -> Vec<DiseaseRisk> {
    let rainy = season.is_rainy();
    let poor_sanitation = sanitation == Sanitation::Poor;
    let unsafe_water = water_source.is_unsafe();
    let low_vaccination = vaccination_rate.trunc() < 60.0;

    let mut risks: Vec<DiseaseRisk> = OutbreakDisease::ordered()
        .into_iter()
        .map(|disease| {
            let mut score = disease.base_score();
            if rainy {
                score += if disease.is_mosquito_borne() { 25 } else { 15 };
            }
            if poor_sanitation {
                score += if disease.is_waterborne() { 20 } else { 5 };
            }
            if unsafe_water {
                score += if disease.is_waterborne() { 30 } else { 5 };
            }
            if low_vaccination && disease == OutbreakDisease::Covid {
                score += 25;
            }

            let score = score.min(SCORE_CAP);
            DiseaseRisk {
                disease: disease.label(),
                score,
                level: RiskThresholds::REGIONAL.classify(score),
            }
        })
        .collect();

    risks.sort_by(|a, b| b.score.cmp(&a.score));
    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(risks: &[DiseaseRisk], disease: &str) -> u32 {
        risks
            .iter()
            .find(|risk| risk.disease == disease)
            .map(|risk| risk.score)
            .expect("disease scored")
    }

    #[test]
    fn wet_season_with_unsafe_water_ranks_waterborne_first() {
        let risks = outbreak_risk(
            Season::Monsoon,
            Sanitation::Poor,
            WaterSource::Pond,
            40.0,
        );

        let order: Vec<&str> = risks.iter().map(|risk| risk.disease).collect();
        assert_eq!(order, vec!["Cholera", "Typhoid", "COVID", "Malaria", "Dengue"]);
        assert_eq!(score_of(&risks, "Cholera"), 85);
        assert_eq!(score_of(&risks, "Typhoid"), 75);
        assert_eq!(score_of(&risks, "COVID"), 70, "includes low-vaccination bump");
        assert_eq!(risks[0].level, RiskLevel::High);
        assert_eq!(risks[4].level, RiskLevel::Medium);
    }

    #[test]
    fn defaults_keep_base_scores() {
        let risks = outbreak_risk(Season::Summer, Sanitation::Moderate, WaterSource::Tap, 70.0);

        let order: Vec<(&str, u32)> = risks.iter().map(|risk| (risk.disease, risk.score)).collect();
        assert_eq!(
            order,
            vec![
                ("Cholera", 20),
                ("COVID", 20),
                ("Malaria", 10),
                ("Dengue", 10),
                ("Typhoid", 10),
            ]
        );
        assert!(risks.iter().all(|risk| risk.level == RiskLevel::Low));
    }

    #[test]
    fn fractional_vaccination_rate_is_truncated() {
        let risks = outbreak_risk(
            Season::PostMonsoon,
            Sanitation::Good,
            WaterSource::River,
            59.9,
        );
        assert_eq!(score_of(&risks, "COVID"), 65);
        assert_eq!(score_of(&risks, "Cholera"), 65);
        assert_eq!(score_of(&risks, "Typhoid"), 55);
    }

    #[test]
    fn unrecognised_categories_apply_no_adjustment() {
        let risks = outbreak_risk(
            Season::from("Monsoon"),
            Sanitation::from("terrible"),
            WaterSource::from("well"),
            60.0,
        );
        let baseline = outbreak_risk(Season::Summer, Sanitation::Good, WaterSource::Tap, 60.0);
        assert_eq!(risks, baseline);
    }

    #[test]
    fn scores_are_capped() {
        let risks = outbreak_risk(Season::Monsoon, Sanitation::Poor, WaterSource::River, -10.0);
        assert!(risks.iter().all(|risk| risk.score <= SCORE_CAP));
    }

    #[test]
    fn request_defaults_match_service_form() {
        let conditions: OutbreakConditions =
            serde_json::from_str(r#"{"region": "Kadapa"}"#).expect("deserializes");
        assert_eq!(conditions.season, Season::Summer);
        assert_eq!(conditions.sanitation, Sanitation::Moderate);
        assert_eq!(conditions.water_source, WaterSource::Tap);
        assert_eq!(conditions.vaccination_rate, 70.0);
        assert_eq!(conditions.estimate().len(), 5);
    }

    #[test]
    fn repeated_estimates_are_identical() {
        let conditions = OutbreakConditions {
            region: "Nellore".to_string(),
            season: Season::PostMonsoon,
            sanitation: Sanitation::Poor,
            water_source: WaterSource::Unfiltered,
            vaccination_rate: 55.0,
        };

        let first = conditions.estimate();
        assert_eq!(conditions.estimate(), first);
        assert_eq!(
            outbreak_risk(Season::PostMonsoon, Sanitation::Poor, WaterSource::Unfiltered, 55.0),
            first
        );
    }

    #[test]
    fn vaccination_rate_accepts_form_strings() {
        let conditions: OutbreakConditions =
            serde_json::from_str(r#"{"vaccination_rate": "59.9"}"#).expect("deserializes");
        assert_eq!(conditions.vaccination_rate, 59.9);
        assert_eq!(score_of(&conditions.estimate(), "COVID"), 45);
    }
}
