use serde::{Deserialize, Serialize};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;
const IDEAL_UPPER_BMI: f64 = 24.9;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BmiRequest {
    #[serde(default, deserialize_with = "crate::numeric::float")]
    pub weight: f64,
    /// Height in centimetres.
    #[serde(default, deserialize_with = "crate::numeric::float")]
    pub height: f64,
    /// Accepted for form compatibility; BMI bands are not age-adjusted.
    #[serde(default = "default_age", deserialize_with = "crate::numeric::int")]
    pub age: i32,
}

fn default_age() -> i32 {
    25
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => "#f59e0b",
            Self::Normal => "#16a34a",
            Self::Overweight => "#ea580c",
            Self::Obese => "#dc2626",
        }
    }

    pub const fn advice(self) -> &'static [&'static str] {
        match self {
            Self::Underweight => &[
                "Increase calorie intake with nutritious food",
                "Eat iron-rich foods (lentils, spinach)",
                "Consult doctor to rule out malnutrition or anemia",
                "Add protein: eggs, milk, pulses",
            ],
            Self::Normal => &[
                "Maintain current healthy lifestyle",
                "Exercise 30 mins daily",
                "Balanced diet with fruits and vegetables",
                "Annual health checkup recommended",
            ],
            Self::Overweight => &[
                "Reduce oil and sugar intake",
                "Walk 45 mins daily",
                "Avoid processed/junk food",
                "Monitor blood pressure and sugar levels",
            ],
            Self::Obese => &[
                "Consult doctor for weight management plan",
                "Strict diet control needed",
                "Regular exercise under guidance",
                "Check for diabetes and BP regularly",
            ],
        }
    }

    pub const fn risk(self) -> &'static str {
        match self {
            Self::Underweight => "Risk: Anemia, Malnutrition, Weak immunity",
            Self::Normal => "Low health risk - Keep it up!",
            Self::Overweight => "Risk: Diabetes, Hypertension, Heart Disease",
            Self::Obese => "High Risk: Diabetes, Heart Attack, Joint Problems",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: &'static str,
    pub color: &'static str,
    pub advice: &'static [&'static str],
    pub risk: &'static str,
    pub ideal_weight_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BmiError {
    #[error("Invalid values")]
    InvalidMeasurements,
}

/// Body-mass index from weight (kg) and height (cm), rounded to one decimal.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReport, BmiError> {
    // Negated comparisons also reject NaN.
    if !(weight_kg > 0.0) || !(height_cm > 0.0) {
        return Err(BmiError::InvalidMeasurements);
    }

    let height_m = height_cm / 100.0;
    let height_sq = height_m.powi(2);
    let bmi = round_tenth(weight_kg / height_sq);
    let category = BmiCategory::from_bmi(bmi);

    let ideal_min = round_tenth(UNDERWEIGHT_BELOW * height_sq);
    let ideal_max = round_tenth(IDEAL_UPPER_BMI * height_sq);

    Ok(BmiReport {
        bmi,
        category: category.label(),
        color: category.color(),
        advice: category.advice(),
        risk: category.risk(),
        ideal_weight_range: format!("{ideal_min:.1} - {ideal_max:.1} kg"),
    })
}

impl BmiRequest {
    pub fn calculate(&self) -> Result<BmiReport, BmiError> {
        calculate_bmi(self.weight, self.height)
    }
}

// Rounds the exact binary value (ties to even), so 24.95 stays 24.9.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
