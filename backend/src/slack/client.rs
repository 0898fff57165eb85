//! Slack Web API client

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Web API failures
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered `{"ok": false, "error": ...}`
    #[error("Slack API error: {0}")]
    Api(String),
}

/// Common fields of a Web API response
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    ts: Option<String>,
}

/// Client for the few Web API methods the bot calls
#[derive(Clone)]
pub struct SlackClient {
    http_client: Client,
    base_url: String,
    bot_token: SecretString,
}

impl SlackClient {
    pub fn new(base_url: impl Into<String>, bot_token: SecretString) -> Result<Self, SlackError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("vitalbot/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bot_token,
        })
    }

    async fn call(&self, method: &str, body: &Value) -> Result<ApiResponse, SlackError> {
        debug!(method, "Calling Slack Web API");
        let response: ApiResponse = self
            .http_client
            .post(format!("{}/{}", self.base_url, method))
            .bearer_auth(self.bot_token.expose_secret())
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.ok {
            Ok(response)
        } else {
            Err(SlackError::Api(
                response.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }

    /// `chat.postMessage`; returns the message timestamp
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        blocks: Option<&Value>,
    ) -> Result<Option<String>, SlackError> {
        let mut body = json!({"channel": channel, "text": text});
        if let Some(blocks) = blocks {
            body["blocks"] = blocks.clone();
        }
        Ok(self.call("chat.postMessage", &body).await?.ts)
    }

    /// `chat.update`
    pub async fn update_message(
        &self,
        channel: &str,
        ts: &str,
        text: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        let body = json!({"channel": channel, "ts": ts, "text": text, "blocks": blocks});
        self.call("chat.update", &body).await.map(|_| ())
    }

    /// `views.open`
    pub async fn open_view(&self, trigger_id: &str, view: &Value) -> Result<(), SlackError> {
        let body = json!({"trigger_id": trigger_id, "view": view});
        self.call("views.open", &body).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> SlackClient {
        SlackClient::new(server.uri(), SecretString::new("xoxb-test".to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_post_message_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.postMessage"))
            .and(header("authorization", "Bearer xoxb-test"))
            .and(body_partial_json(json!({"channel": "C1", "text": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "ts": "1.2"})))
            .expect(1)
            .mount(&server)
            .await;

        let ts = client(&server).post_message("C1", "hello", None).await.unwrap();
        assert_eq!(ts.as_deref(), Some("1.2"));
    }

    #[tokio::test]
    async fn test_api_error_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/views.open"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": "expired_trigger_id"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).open_view("T.1", &json!({})).await.unwrap_err();
        assert!(matches!(err, SlackError::Api(ref code) if code == "expired_trigger_id"));
    }

    #[tokio::test]
    async fn test_http_failure_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat.update"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server)
            .update_message("C1", "1.2", "text", &json!([]))
            .await
            .unwrap_err();
        assert!(matches!(err, SlackError::Http(_)));
    }
}
