//! Vitalbot WASM Module
//!
//! WebAssembly bindings for the text engines, so a browser preview can show
//! exactly what the bot would reply.

use chrono::DateTime;
use vitalbot_shared::{render, CompletionLevel, ExerciseLinks, FixedClock};
use wasm_bindgen::prelude::*;

/// Life expectancy line; empty when any answer is missing
#[wasm_bindgen]
pub fn life_expectancy_message(
    gender: Option<String>,
    age: Option<u32>,
    tobacco_use: Option<String>,
    ldl_cholesterol: Option<u32>,
) -> String {
    vitalbot_shared::life_expectancy_message(
        gender.as_deref(),
        age,
        tobacco_use.as_deref(),
        ldl_cholesterol,
    )
}

#[wasm_bindgen]
pub fn bmi_status(height_cm: f64, weight_kg: f64) -> String {
    vitalbot_shared::calculate_bmi_status(height_cm, weight_kg)
}

#[wasm_bindgen]
pub fn ideal_body_weight(gender: &str, height_cm: f64, weight_kg: f64) -> String {
    vitalbot_shared::ideal_body_weight_feedback(gender, height_cm, weight_kg)
}

#[wasm_bindgen]
pub fn bmr_status(gender: &str, height_cm: f64, age: u32, weight_kg: f64) -> String {
    vitalbot_shared::calculate_bmr_status(gender, height_cm, age, weight_kg)
}

#[wasm_bindgen]
pub fn breathing_guidance(muscle_group: &str) -> String {
    vitalbot_shared::breathing_guidance(muscle_group)
}

#[wasm_bindgen]
pub fn exercise_plan(muscle_group: &str, gender: &str) -> String {
    vitalbot_shared::exercise_plan(muscle_group, gender)
}

/// Exercise guide without links
#[wasm_bindgen]
pub fn exercise_guide(gender: &str, muscle_group: &str) -> String {
    vitalbot_shared::exercise_guide_with_links(gender, muscle_group, &ExerciseLinks::new())
}

/// Cues joined one per line
#[wasm_bindgen]
pub fn biomechanical_cues(gender: &str, muscle_group: &str) -> String {
    vitalbot_shared::biomechanical_cues(gender, muscle_group).join("\n")
}

#[wasm_bindgen]
pub fn set_prescription(muscle_group: &str, gender: &str) -> String {
    vitalbot_shared::set_prescription(muscle_group, gender)
}

#[wasm_bindgen]
pub fn rest_and_fiber_bias(gender: &str, muscle_group: &str) -> String {
    vitalbot_shared::rest_and_fiber_bias(gender, muscle_group)
}

#[wasm_bindgen]
pub fn reps_and_load(gender: &str, muscle_group: &str, training_weight: &str) -> String {
    vitalbot_shared::reps_and_load_percentage(gender, muscle_group, training_weight)
}

/// Encouragement for a completion label such as `60%`
#[wasm_bindgen]
pub fn motivation(completion: &str) -> String {
    render(completion.parse::<CompletionLevel>().map(|level| level.message()))
}

/// Completion labels offered by the progress form, as a JSON array
#[wasm_bindgen]
pub fn completion_levels() -> String {
    let labels: Vec<String> = CompletionLevel::all().map(|level| level.label()).collect();
    serde_json::to_string(&labels).unwrap_or_default()
}

/// Status banner for a Unix time in milliseconds
#[wasm_bindgen]
pub fn status_banner(epoch_ms: f64) -> String {
    DateTime::from_timestamp_millis(epoch_ms as i64)
        .map(|now| vitalbot_shared::generate_status_message(&FixedClock(now)))
        .unwrap_or_default()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_reps_and_load_in_browser() {
        assert!(reps_and_load("male", "Pectoralis Major", "").contains("Estimated 1RM: N/A"));
    }
}
