//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. Everything in it
//! is built once at start-up and is read-only afterwards.

use crate::config::AppConfig;
use crate::slack::{SignatureVerifier, SlackClient};
use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use vitalbot_shared::{Clock, ExerciseLinks, SystemClock};

/// Shared application state
///
/// All fields are Arc'd or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Slack Web API client
    pub slack: SlackClient,
    /// Pre-computed HMAC key for request verification
    pub verifier: SignatureVerifier,
    /// Exercise name to reference URL table
    pub links: Arc<ExerciseLinks>,
    /// Time source for the status banner and the replay window
    pub clock: Arc<dyn Clock>,
    /// Prometheus handle, when the recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state using the system clock
    pub fn new(config: AppConfig, links: ExerciseLinks) -> Result<Self> {
        let slack = SlackClient::new(config.slack.api_base_url.clone(), config.slack.bot_token.clone())
            .context("Failed to build Slack client")?;
        let verifier = SignatureVerifier::new(&config.slack.signing_secret, config.slack.replay_window_secs);

        Ok(Self {
            config: Arc::new(config),
            slack,
            verifier,
            links: Arc::new(links),
            clock: Arc::new(SystemClock),
            metrics: None,
        })
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Expose metrics through the given Prometheus handle
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vitalbot_shared::FixedClock;

    #[test]
    fn test_state_clone_shares_tables() {
        let links = ExerciseLinks::from_pairs([("Cable Fly", "https://example.com/fly")]);
        let state = AppState::new(AppConfig::default(), links).unwrap();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.links, &cloned.links));
        assert!(state.metrics.is_none());
    }

    #[test]
    fn test_with_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let state = AppState::new(AppConfig::default(), ExerciseLinks::new())
            .unwrap()
            .with_clock(Arc::new(FixedClock(instant)));
        assert_eq!(state.clock.now(), instant);
    }
}
