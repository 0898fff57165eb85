//! Form service - reads submitted modals into validated submissions

use crate::slack::blocks::{self, Field, MenuChoice};
use crate::slack::payload::ViewState;
use serde_json::{json, Map, Value};
use vitalbot_shared::types::{
    LongevityForm, LongevitySubmission, ProgressForm, ProgressSubmission, TrainingForm,
    TrainingSubmission, VitalViewForm, VitalViewSubmission,
};
use vitalbot_shared::FieldError;

/// A validated modal submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Longevity(LongevitySubmission),
    VitalView(VitalViewSubmission),
    Training(TrainingSubmission),
    Progress(ProgressSubmission),
}

impl Submission {
    /// Metric label for the form
    pub fn form_name(&self) -> &'static str {
        match self {
            Submission::Longevity(_) => "longevity",
            Submission::VitalView(_) => "vital_view",
            Submission::Training(_) => "training_plan",
            Submission::Progress(_) => "progress_check",
        }
    }
}

/// Form service
pub struct FormService;

impl FormService {
    /// Read and validate the modal opened for `choice`
    pub fn read(choice: MenuChoice, state: &ViewState) -> Result<Submission, Vec<FieldError>> {
        let value = |field: Field| state.value(field.block_id, field.action_id);

        match choice {
            MenuChoice::Longevity => LongevityForm {
                gender: value(blocks::GENDER),
                age: value(blocks::AGE),
                tobacco_use: value(blocks::SMOKES),
                ldl_cholesterol: value(blocks::LDL),
            }
            .parse()
            .map(Submission::Longevity),
            MenuChoice::VitalView => VitalViewForm {
                gender: value(blocks::GENDER),
                age: value(blocks::AGE),
                height_cm: value(blocks::HEIGHT),
                weight_kg: value(blocks::WEIGHT),
            }
            .parse()
            .map(Submission::VitalView),
            MenuChoice::TrainingPlan => TrainingForm {
                gender: value(blocks::GENDER),
                muscle_group: value(blocks::MUSCLE),
                training_weight: value(blocks::TRAINING_WEIGHT),
            }
            .parse()
            .map(Submission::Training),
            MenuChoice::ProgressCheck => ProgressForm {
                completion: value(blocks::COMPLETION),
            }
            .parse()
            .map(Submission::Progress),
        }
    }

    /// `response_action: errors` body flagging each bad field in the modal
    pub fn error_response(errors: &[FieldError]) -> Value {
        let mut by_block = Map::new();
        for error in errors {
            let block_id = blocks::block_for(&error.field).unwrap_or(error.field.as_str());
            by_block
                .entry(block_id.to_string())
                .or_insert_with(|| Value::String(error.message.clone()));
        }
        json!({"response_action": "errors", "errors": by_block})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(values: Value) -> ViewState {
        serde_json::from_value(json!({ "values": values })).unwrap()
    }

    #[test]
    fn test_reads_vital_view() {
        let state = state(json!({
            "gender_block": {"gender_select": {"selected_option": {"value": "male"}}},
            "age_block": {"age_input": {"value": "35"}},
            "height_block": {"height_input": {"value": "180"}},
            "weight_block": {"weight_input": {"value": "80 kg"}}
        }));
        let Submission::VitalView(submission) = FormService::read(MenuChoice::VitalView, &state).unwrap() else {
            panic!("expected vital view");
        };
        assert_eq!(submission.height_cm, 180.0);
        assert_eq!(submission.weight_kg, 80.0);
    }

    #[test]
    fn test_errors_keyed_by_block() {
        let state = state(json!({
            "gender_block": {"gender_select": {"selected_option": {"value": "male"}}},
            "age_block": {"age_input": {"value": "abc"}},
            "smoke_block": {"smoke_input": {"selected_option": {"value": "No"}}}
        }));
        let errors = FormService::read(MenuChoice::Longevity, &state).unwrap_err();
        let body = FormService::error_response(&errors);
        assert_eq!(body["response_action"], "errors");
        assert_eq!(body["errors"]["age_block"], "Age must be a whole number, e.g. 35");
        assert_eq!(body["errors"]["ldl_block"], "This field is required");
        assert!(body["errors"].get("gender_block").is_none());
    }

    #[test]
    fn test_reads_progress() {
        let state = state(json!({
            "completion_block": {"completion_select": {"selected_option": {"value": "60%"}}}
        }));
        let submission = FormService::read(MenuChoice::ProgressCheck, &state).unwrap();
        assert_eq!(submission.form_name(), "progress_check");
    }
}
