//! Lenient numeric fields for form-style request bodies.
//!
//! Clinic front ends post numbers either as JSON numbers or as strings taken
//! straight from input fields (`"age": "70"`). Both are accepted; anything else
//! is a deserialization error.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|err| de::Error::custom(format!("'{raw}' is not a number ({err})"))),
    }
}

/// Float from a JSON number or numeric string.
pub(crate) fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_f64(deserializer)
}

/// Whole number from a JSON number or numeric string, truncated toward zero.
pub(crate) fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?.trunc();
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(de::Error::custom(format!("{value} is out of range for a whole number")))
    }
}
