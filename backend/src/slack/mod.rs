//! Slack integration: request verification, payloads, Block Kit and Web API

pub mod blocks;
pub mod client;
pub mod payload;
pub mod signature;

pub use client::{SlackClient, SlackError};
pub use signature::{SignatureValidation, SignatureVerifier};
