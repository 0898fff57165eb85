//! Form submission types
//!
//! Each modal has a raw form (the text the user entered, field by field)
//! and a validated submission. `parse` turns one into the other, reporting
//! every unusable field at once so the modal can flag them together.

use crate::models::{BodyMetrics, Gender, HealthProfile, TrainingRequest};
use crate::motivation::CompletionLevel;
use crate::muscles::MuscleGroup;
use crate::validation::{field_errors, parse_number, parse_whole_number, parse_yes_no, FieldError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Collects per-field parse failures while a form is read
#[derive(Default)]
struct FieldParser {
    errors: Vec<FieldError>,
}

impl FieldParser {
    fn field<T>(
        &mut self,
        name: &str,
        raw: Option<&str>,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> Option<T> {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            self.errors.push(FieldError::required(name));
            return None;
        };
        match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.errors.push(FieldError::new(name, &message));
                None
            }
        }
    }
}

fn parse_gender(raw: &str) -> Result<Gender, String> {
    raw.parse().map_err(|err: crate::EngineError| err.to_string())
}

fn whole(raw: &str, message: &str) -> Result<u32, String> {
    parse_whole_number(raw).ok_or_else(|| message.to_string())
}

fn number(raw: &str, message: &str) -> Result<f64, String> {
    parse_number(raw).ok_or_else(|| message.to_string())
}

fn validated<T: Validate>(submission: T) -> Result<T, Vec<FieldError>> {
    match submission.validate() {
        Ok(()) => Ok(submission),
        Err(errors) => Err(field_errors(&errors)),
    }
}

// ============================================================================
// Longevity
// ============================================================================

/// Raw fields of the longevity modal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LongevityForm {
    pub gender: Option<String>,
    pub age: Option<String>,
    pub tobacco_use: Option<String>,
    pub ldl_cholesterol: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct LongevitySubmission {
    pub gender: Gender,
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u32,
    pub tobacco_use: bool,
    #[validate(range(min = 20, max = 500, message = "LDL cholesterol must be between 20 and 500 mg/dL"))]
    pub ldl_cholesterol: u32,
}

impl LongevityForm {
    pub fn parse(&self) -> Result<LongevitySubmission, Vec<FieldError>> {
        let mut fields = FieldParser::default();
        let gender = fields.field("gender", self.gender.as_deref(), parse_gender);
        let age = fields.field("age", self.age.as_deref(), |raw| {
            whole(raw, "Age must be a whole number, e.g. 35")
        });
        let tobacco_use = fields.field("tobacco_use", self.tobacco_use.as_deref(), |raw| {
            parse_yes_no(raw).ok_or_else(|| "Please answer Yes or No".to_string())
        });
        let ldl_cholesterol = fields.field("ldl_cholesterol", self.ldl_cholesterol.as_deref(), |raw| {
            whole(raw, "LDL cholesterol must be a whole number in mg/dL, e.g. 110")
        });

        match (gender, age, tobacco_use, ldl_cholesterol) {
            (Some(gender), Some(age), Some(tobacco_use), Some(ldl_cholesterol)) => {
                validated(LongevitySubmission {
                    gender,
                    age,
                    tobacco_use,
                    ldl_cholesterol,
                })
            }
            _ => Err(fields.errors),
        }
    }
}

impl LongevitySubmission {
    pub fn profile(&self) -> HealthProfile {
        HealthProfile {
            gender: self.gender,
            age: self.age,
            tobacco_use: self.tobacco_use,
            ldl_cholesterol: self.ldl_cholesterol,
        }
    }
}

// ============================================================================
// Vital view
// ============================================================================

/// Raw fields of the vital view modal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalViewForm {
    pub gender: Option<String>,
    pub age: Option<String>,
    pub height_cm: Option<String>,
    pub weight_kg: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct VitalViewSubmission {
    pub gender: Gender,
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: u32,
    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height_cm: f64,
    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight_kg: f64,
}

impl VitalViewForm {
    pub fn parse(&self) -> Result<VitalViewSubmission, Vec<FieldError>> {
        let mut fields = FieldParser::default();
        let gender = fields.field("gender", self.gender.as_deref(), parse_gender);
        let age = fields.field("age", self.age.as_deref(), |raw| {
            whole(raw, "Age must be a whole number, e.g. 35")
        });
        let height_cm = fields.field("height_cm", self.height_cm.as_deref(), |raw| {
            number(raw, "Height must be a number in centimeters, e.g. 175")
        });
        let weight_kg = fields.field("weight_kg", self.weight_kg.as_deref(), |raw| {
            number(raw, "Weight must be a number in kilograms, e.g. 75")
        });

        match (gender, age, height_cm, weight_kg) {
            (Some(gender), Some(age), Some(height_cm), Some(weight_kg)) => {
                validated(VitalViewSubmission {
                    gender,
                    age,
                    height_cm,
                    weight_kg,
                })
            }
            _ => Err(fields.errors),
        }
    }
}

impl VitalViewSubmission {
    pub fn body_metrics(&self) -> BodyMetrics {
        BodyMetrics {
            gender: self.gender,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            age: self.age,
        }
    }
}

// ============================================================================
// Training plan
// ============================================================================

/// Raw fields of the training plan modal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingForm {
    pub gender: Option<String>,
    pub muscle_group: Option<String>,
    /// Optional; anything that is not a positive number is ignored
    pub training_weight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSubmission {
    pub gender: Gender,
    pub muscle_group: MuscleGroup,
    /// Text as entered, echoed back to the user
    pub training_weight: Option<String>,
}

impl TrainingForm {
    pub fn parse(&self) -> Result<TrainingSubmission, Vec<FieldError>> {
        let mut fields = FieldParser::default();
        let gender = fields.field("gender", self.gender.as_deref(), parse_gender);
        let muscle_group = fields.field("muscle_group", self.muscle_group.as_deref(), |raw| {
            raw.parse::<MuscleGroup>().map_err(|err| err.to_string())
        });

        match (gender, muscle_group) {
            (Some(gender), Some(muscle_group)) => Ok(TrainingSubmission {
                gender,
                muscle_group,
                training_weight: self
                    .training_weight
                    .as_deref()
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(fields.errors),
        }
    }
}

impl TrainingSubmission {
    pub fn request(&self) -> TrainingRequest {
        TrainingRequest::new(
            self.gender,
            self.muscle_group,
            self.training_weight.as_deref().unwrap_or_default(),
        )
    }
}

// ============================================================================
// Progress check
// ============================================================================

/// Raw fields of the progress check modal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressForm {
    pub completion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSubmission {
    pub completion: CompletionLevel,
}

impl ProgressForm {
    pub fn parse(&self) -> Result<ProgressSubmission, Vec<FieldError>> {
        let mut fields = FieldParser::default();
        fields
            .field("completion", self.completion.as_deref(), |raw| {
                raw.parse::<CompletionLevel>().map_err(|err| err.to_string())
            })
            .map(|completion| ProgressSubmission { completion })
            .ok_or(fields.errors)
    }
}
