//! Input validation functions
//!
//! Form fields arrive as free text typed into chat modals. These helpers
//! pull numbers out of that text leniently ("175 cm", "80kg") and turn
//! `validator` failures into per-field messages the bot can show next to
//! the offending input.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use validator::ValidationErrors;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").unwrap());

/// First number in a free-text field, e.g. `"175 cm"` gives `175.0`
pub fn parse_number(raw: &str) -> Option<f64> {
    NUMBER
        .find(raw)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Non-negative whole number from a free-text field; `"35.5"` is rejected
pub fn parse_whole_number(raw: &str) -> Option<u32> {
    parse_number(raw)
        .filter(|value| *value >= 0.0 && value.fract() == 0.0 && *value <= f64::from(u32::MAX))
        .map(|value| value as u32)
}

/// Yes/no answer, case-insensitive
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" | "true" => Some(true),
        "no" | "n" | "false" => Some(false),
        _ => None,
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map form field names to the labels shown in the modals
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "age" => "Age",
        "tobacco_use" | "smokes" => "Tobacco use",
        "ldl_cholesterol" | "ldl" => "LDL cholesterol",
        "height_cm" | "height" => "Height",
        "weight_kg" | "weight" => "Weight",
        "muscle_group" => "Target muscle",
        "training_weight" => "Training weight",
        "completion" => "Completion",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "This field is required")
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Flatten `validator` errors into one [`FieldError`] per field, sorted by field
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, failures)| {
            let field = field.to_string();
            failures.first().map(|failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", failure.code));
                FieldError::new(&field, &message)
            })
        })
        .collect();
    flattened.sort_by(|a, b| a.field.cmp(&b.field));
    flattened
}
