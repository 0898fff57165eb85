//! Configuration management for the Vitalbot backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: VB__)

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;
use tracing::{info, warn};
use vitalbot_shared::ExerciseLinks;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub slack: SlackConfig,
    pub exercise_links: ExerciseLinksConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Slack app credentials and Web API location
#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Bot user OAuth token (`xoxb-...`)
    pub bot_token: SecretString,
    /// Signing secret used to verify incoming requests
    pub signing_secret: SecretString,
    pub api_base_url: String,
    /// Maximum age of a signed request
    pub replay_window_secs: i64,
}

/// Location of the exercise name to URL table
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseLinksConfig {
    pub path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                request_timeout_secs: 30,
            },
            slack: SlackConfig {
                bot_token: SecretString::new(String::new()),
                signing_secret: SecretString::new(String::new()),
                api_base_url: "https://slack.com/api".to_string(),
                replay_window_secs: 300,
            },
            exercise_links: ExerciseLinksConfig {
                path: "config/exercise_links.toml".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with VB__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);
        let defaults = AppConfig::default();

        let config = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.request_timeout_secs", defaults.server.request_timeout_secs as i64)?
            .set_default("slack.bot_token", "")?
            .set_default("slack.signing_secret", "")?
            .set_default("slack.api_base_url", defaults.slack.api_base_url)?
            .set_default("slack.replay_window_secs", defaults.slack.replay_window_secs)?
            .set_default("exercise_links.path", defaults.exercise_links.path)?
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., VB__SLACK__BOT_TOKEN=xoxb-... sets slack.bot_token
            .add_source(config::Environment::with_prefix("VB").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unfit for production
    pub fn production_problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if self.slack.bot_token.expose_secret().trim().is_empty() {
            problems.push("Slack bot token must be set (VB__SLACK__BOT_TOKEN)");
        }
        if self.slack.signing_secret.expose_secret().trim().is_empty() {
            problems.push("Slack signing secret must be set (VB__SLACK__SIGNING_SECRET)");
        }
        if self.slack.replay_window_secs <= 0 {
            problems.push("Slack replay window must be positive");
        }
        problems
    }
}

/// On-disk shape of the exercise link table
#[derive(Debug, Deserialize)]
struct ExerciseLinksFile {
    #[serde(default)]
    links: HashMap<String, String>,
}

/// Parse an exercise link table from TOML text
pub fn parse_exercise_links(text: &str) -> Result<ExerciseLinks> {
    let file: ExerciseLinksFile = toml::from_str(text).context("Invalid exercise link table")?;
    Ok(ExerciseLinks::from_pairs(file.links))
}

/// Load the exercise link table; a missing file yields an empty table
pub fn load_exercise_links(path: impl AsRef<Path>) -> Result<ExerciseLinks> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "Exercise link table not found, guides will have no links");
        return Ok(ExerciseLinks::new());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read exercise link table {}", path.display()))?;
    let links = parse_exercise_links(&text)?;
    info!(path = %path.display(), count = links.len(), "Loaded exercise links");
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.slack.api_base_url, "https://slack.com/api");
        assert_eq!(config.slack.replay_window_secs, 300);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_default_config_is_not_production_ready() {
        let problems = AppConfig::default().production_problems();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_configured_secrets_pass_production_check() {
        let mut config = AppConfig::default();
        config.slack.bot_token = SecretString::new("xoxb-test".to_string());
        config.slack.signing_secret = SecretString::new("shh".to_string());
        assert!(config.production_problems().is_empty());
    }

    #[test]
    fn test_parse_exercise_links() {
        let links = parse_exercise_links(
            r#"
            [links]
            "Barbell Bench Press" = "https://example.com/bench"
            "romanian deadlift" = "https://example.com/rdl"
            "#,
        )
        .unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links.get("barbell bench press"), Some("https://example.com/bench"));
    }

    #[test]
    fn test_parse_exercise_links_rejects_bad_toml() {
        assert!(parse_exercise_links("[links\n").is_err());
    }

    #[test]
    fn test_missing_link_file_is_empty_table() {
        let links = load_exercise_links("does/not/exist.toml").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_bundled_link_table_parses() {
        let links = parse_exercise_links(include_str!("../../../config/exercise_links.toml")).unwrap();
        assert!(links.get("Barbell Bench Press").is_some());
    }
}
