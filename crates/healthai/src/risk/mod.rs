//! Regional outbreak and personal lifestyle risk estimators.
//!
//! Both estimators start from fixed base scores, add constant penalties for each
//! matched factor, and cap every score at [`SCORE_CAP`]. They share the
//! [`RiskLevel`] scale but classify with their own [`RiskThresholds`].

mod level;
pub mod outbreak;
pub mod personal;

pub use level::{RiskLevel, RiskThresholds, SCORE_CAP};
pub use outbreak::{
    outbreak_risk, DiseaseRisk, OutbreakConditions, OutbreakDisease, Sanitation, Season,
    WaterSource,
};
pub use personal::{
    personal_risk, DietQuality, ExerciseLevel, Gender, PersonalCondition, PersonalProfile,
    PersonalRiskReport, RiskFactor, ScoredCondition,
};
