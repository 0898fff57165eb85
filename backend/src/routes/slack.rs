//! Slack request endpoint
//!
//! Slack posts both Events API callbacks (JSON) and interactivity payloads
//! (form-encoded) here. Every request must carry a valid signature. Slack
//! wants an answer within three seconds, so Web API follow-ups run on
//! spawned tasks and the handler acknowledges right away.

use crate::error::{ApiError, ApiResult};
use crate::services::{FormService, ReplyService};
use crate::slack::blocks::{self, MenuChoice};
use crate::slack::payload::{
    BlockActions, Event, EventEnvelope, Interaction, InteractionForm, ViewSubmission,
};
use crate::slack::signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::slack::SlackError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use serde_json::json;
use std::future::Future;
use tracing::{debug, error, info, warn};
use vitalbot_shared::generate_status_message;

const RETRY_HEADER: &str = "x-slack-retry-num";

/// POST /slack/events
pub async fn slack_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    counter!("vitalbot_slack_requests_total").increment(1);

    let header_str = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let validation = state.verifier.verify(
        header_str(TIMESTAMP_HEADER),
        header_str(SIGNATURE_HEADER),
        &body,
        state.clock.now().timestamp(),
    );
    if !validation.is_valid() {
        warn!(?validation, "Rejected Slack request");
        counter!("vitalbot_slack_rejected_total").increment(1);
        return Err(ApiError::Unauthorized("Invalid request signature".to_string()));
    }

    // The first delivery was already handled
    if let Some(attempt) = header_str(RETRY_HEADER) {
        debug!(attempt, "Ignoring Slack retry");
        return Ok(StatusCode::OK.into_response());
    }

    let is_form = header_str(header::CONTENT_TYPE.as_str())
        .is_some_and(|content_type| content_type.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        handle_interaction(&state, &body)
    } else {
        handle_event(&state, &body)
    }
}

fn handle_event(state: &AppState, body: &[u8]) -> ApiResult<Response> {
    let envelope: EventEnvelope = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid event body: {e}")))?;

    match envelope {
        EventEnvelope::UrlVerification { challenge } => {
            info!("Answering URL verification challenge");
            Ok(Json(json!({ "challenge": challenge })).into_response())
        }
        EventEnvelope::EventCallback { event } => {
            greet(state, &event);
            Ok(StatusCode::OK.into_response())
        }
        EventEnvelope::Other => Ok(StatusCode::OK.into_response()),
    }
}

/// Post the menu in reply to a mention or direct message
fn greet(state: &AppState, event: &Event) {
    let Some((user, channel)) = event.greeting_target() else {
        debug!(kind = %event.kind, "Ignoring event");
        return;
    };
    info!(user, channel, kind = %event.kind, "Greeting user");

    let status = generate_status_message(state.clock.as_ref());
    let (text, blocks) = blocks::greeting_menu(user, &status);
    let slack = state.slack.clone();
    let channel = channel.to_string();
    spawn_slack_call("chat.postMessage", async move {
        slack.post_message(&channel, &text, Some(&blocks)).await.map(|_| ())
    });
}

fn handle_interaction(state: &AppState, body: &[u8]) -> ApiResult<Response> {
    let form: InteractionForm = serde_urlencoded::from_bytes(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid interaction body: {e}")))?;
    let interaction: Interaction = serde_json::from_str(&form.payload)
        .map_err(|e| ApiError::BadRequest(format!("Invalid interaction payload: {e}")))?;

    match interaction {
        Interaction::BlockActions(actions) => {
            open_form(state, actions);
            Ok(StatusCode::OK.into_response())
        }
        Interaction::ViewSubmission(submission) => Ok(submit_form(state, submission)),
        Interaction::Other => Ok(StatusCode::OK.into_response()),
    }
}

/// Menu click: open the chosen modal and replace the menu with the choice
fn open_form(state: &AppState, actions: BlockActions) {
    let Some(choice) = actions
        .actions
        .iter()
        .find_map(|action| MenuChoice::from_action_id(&action.action_id))
    else {
        debug!("Ignoring block action without a menu choice");
        return;
    };
    let user = actions.user.id;
    info!(user = %user, choice = choice.action_id(), "Opening form");

    let channel_id = actions.channel.map(|channel| channel.id);
    let view = blocks::modal(choice, channel_id.as_deref().unwrap_or_default());
    let slack = state.slack.clone();
    let trigger_id = actions.trigger_id;
    spawn_slack_call("views.open", async move { slack.open_view(&trigger_id, &view).await });

    if let (Some(channel), Some(message)) = (channel_id, actions.message) {
        let (text, blocks) = blocks::chosen_message(&user, choice);
        let slack = state.slack.clone();
        spawn_slack_call("chat.update", async move {
            slack.update_message(&channel, &message.ts, &text, &blocks).await
        });
    }
}

/// Modal submitted: either flag bad fields or post the computed reply
fn submit_form(state: &AppState, submission: ViewSubmission) -> Response {
    let Some(choice) = MenuChoice::from_callback_id(&submission.view.callback_id) else {
        debug!(callback_id = %submission.view.callback_id, "Ignoring unknown view");
        return StatusCode::OK.into_response();
    };

    let form = match FormService::read(choice, &submission.view.state) {
        Ok(form) => form,
        Err(errors) => {
            info!(form = choice.action_id(), count = errors.len(), "Form has invalid fields");
            counter!("vitalbot_submission_errors_total", "form" => choice.action_id()).increment(1);
            return Json(FormService::error_response(&errors)).into_response();
        }
    };

    counter!("vitalbot_submissions_total", "form" => form.form_name()).increment(1);
    let channel = submission.view.private_metadata;
    if channel.is_empty() {
        warn!(form = form.form_name(), "Submission has no channel to reply to");
        return StatusCode::OK.into_response();
    }

    let reply = ReplyService::compose(&submission.user.id, &form, &state.links);
    let slack = state.slack.clone();
    spawn_slack_call("chat.postMessage", async move {
        slack.post_message(&channel, &reply, None).await.map(|_| ())
    });
    StatusCode::OK.into_response()
}

fn spawn_slack_call<F>(method: &'static str, call: F)
where
    F: Future<Output = Result<(), SlackError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = call.await {
            counter!("vitalbot_slack_api_errors_total", "method" => method).increment(1);
            error!(method, error = %err, "Slack Web API call failed");
        }
    });
}
