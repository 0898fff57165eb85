//! Business logic services

pub mod forms;
pub mod replies;

pub use forms::{FormService, Submission};
pub use replies::ReplyService;
