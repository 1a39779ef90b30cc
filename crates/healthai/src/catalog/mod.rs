//! Static public-health reference data served to clinic dashboards.
//!
//! Every table here is immutable for the life of the process.

pub mod alerts;
pub mod chatbot;
pub mod doctors;
pub mod education;
pub mod frontline;
pub mod hospitals;
pub mod medicines;
pub mod regions;
pub mod translations;

pub use alerts::{alert_for_region, AlertLevel, OutbreakAlert, OUTBREAK_ALERTS};
pub use chatbot::chatbot_response;
pub use doctors::{Doctor, DOCTORS};
pub use education::{education_articles, EducationArticle, EducationView};
pub use frontline::{frontline_summary, FrontlineSummary};
pub use hospitals::{hospitals_for, Hospital};
pub use medicines::medicine_suggestions;
pub use regions::{HealthData, RegionStat, HEALTH_DATA};
pub use translations::{translations_for, Translation};

use serde::Deserialize;

/// Display language for bilingual content. Anything other than `hi`/`te` is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value {
            "hi" => Self::Hindi,
            "te" => Self::Telugu,
            _ => Self::English,
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Picks the variant of a trilingual text matching `language`.
pub(crate) fn localized(
    language: Language,
    english: &'static str,
    hindi: &'static str,
    telugu: &'static str,
) -> &'static str {
    match language {
        Language::English => english,
        Language::Hindi => hindi,
        Language::Telugu => telugu,
    }
}
