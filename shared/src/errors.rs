//! Error types for the Vitalbot computation engine
//!
//! Engine functions never panic on bad input. They return an [`Outcome`],
//! and the text boundary turns failures into the user-visible strings the
//! bot has always sent: nothing for missing input, a readable message for a
//! bad category, a fallback for an unmapped lookup and `Error: ...` for a
//! computation fault.

use std::fmt;
use thiserror::Error;

/// Message shown when a gender other than male or female reaches a formula
pub const INVALID_GENDER_MESSAGE: &str = "Invalid gender. Please use 'male' or 'female'.";

/// Failure kinds of the computation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A required field was absent or zero
    #[error("")]
    MissingInput,

    /// A categorical input (gender, completion level) was not recognised
    #[error("{0}")]
    InvalidCategory(String),

    /// A lookup key has no entry; carries the fallback text
    #[error("{0}")]
    NoMatch(String),

    /// Arithmetic produced something unusable (NaN, infinity)
    #[error("Error: {0}")]
    Computation(String),
}

impl EngineError {
    /// Invalid gender error with the standard message
    pub fn invalid_gender() -> Self {
        EngineError::InvalidCategory(INVALID_GENDER_MESSAGE.to_string())
    }
}

/// Result type of every engine operation
pub type Outcome<T> = Result<T, EngineError>;

/// Render an outcome into the text the user sees
pub fn render<T: fmt::Display>(outcome: Outcome<T>) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(EngineError::MissingInput) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Reject NaN and infinite intermediate values
pub(crate) fn ensure_finite(value: f64, what: &str) -> Outcome<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::Computation(format!("{what} is not a finite number")))
    }
}
