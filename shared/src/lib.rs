//! Vitalbot Shared Library
//!
//! The computation engine behind the bot: health metrics, the exercise
//! knowledge base, the calendar banner and the motivational lookup, plus
//! the form types and validators used by the backend and WASM modules.

pub mod calendar;
pub mod errors;
pub mod exercise_catalog;
pub mod health_metrics;
pub mod loading;
pub mod models;
pub mod motivation;
pub mod muscles;
pub mod training;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use types::*;

pub use calendar::{generate_status_message, Clock, FixedClock, SystemClock};
pub use loading::LoadPrescription;
pub use models::{BodyMetrics, Gender, HealthProfile, TrainingRequest};
pub use motivation::CompletionLevel;
pub use muscles::{breathing_guidance, FiberBias, MuscleGroup};
pub use training::{
    biomechanical_cues, exercise_guide_with_links, exercise_plan, reps_and_load_percentage,
    rest_and_fiber_bias, set_prescription, ExerciseLinks,
};
pub use validation::FieldError;
