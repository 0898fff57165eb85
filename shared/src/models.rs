//! Value types passed into the computation engine

use crate::errors::EngineError;
use crate::muscles::MuscleGroup;
use crate::validation::parse_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used by the physiological formulas and training tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Lowercase form, as submitted by the forms
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(EngineError::invalid_gender()),
        }
    }
}

/// Inputs of the longevity estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    pub tobacco_use: bool,
    /// LDL cholesterol in mg/dL
    pub ldl_cholesterol: u32,
}

/// Inputs of the BMI, ideal weight and BMR formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Age in years
    pub age: u32,
}

/// Inputs of the exercise knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingRequest {
    pub gender: Gender,
    pub muscle_group: MuscleGroup,
    /// Weight used for the compound working sets; `None` when absent or unusable
    pub training_weight_kg: Option<f64>,
}

impl TrainingRequest {
    /// Build a request from the raw training weight field
    ///
    /// A missing, non-positive or implausibly heavy weight becomes `None`.
    pub fn new(gender: Gender, muscle_group: MuscleGroup, training_weight: &str) -> Self {
        Self {
            gender,
            muscle_group,
            training_weight_kg: parse_training_weight(training_weight),
        }
    }
}

/// Heaviest working weight the load tables accept
pub const MAX_TRAINING_WEIGHT_KG: f64 = 1000.0;

/// Parse a training weight leniently (`"60 kg"` gives 60)
///
/// Values outside `(0, MAX_TRAINING_WEIGHT_KG]` are unusable.
pub fn parse_training_weight(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|w| *w > 0.0 && *w <= MAX_TRAINING_WEIGHT_KG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("male", Gender::Male)]
    #[case("Female", Gender::Female)]
    #[case("  MALE ", Gender::Male)]
    fn test_gender_parses_case_insensitively(#[case] raw: &str, #[case] expected: Gender) {
        assert_eq!(raw.parse::<Gender>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_gender_is_invalid_category() {
        let err = "robot".parse::<Gender>().unwrap_err();
        assert_eq!(err, EngineError::invalid_gender());
    }

    #[rstest]
    #[case("80", Some(80.0))]
    #[case(" 62.5 ", Some(62.5))]
    #[case("abc", None)]
    #[case("0", None)]
    #[case("-20", None)]
    #[case("NaN", None)]
    #[case("", None)]
    #[case("60 kg", Some(60.0))]
    #[case("1000", Some(1000.0))]
    #[case("1000.5", None)]
    #[case("5000", None)]
    fn test_parse_training_weight(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_training_weight(raw), expected);
    }

    #[test]
    fn test_gender_serde_is_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }
}
