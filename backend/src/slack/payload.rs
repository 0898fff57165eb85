//! Incoming Slack payloads
//!
//! Events API callbacks arrive as JSON bodies. Interactivity (button clicks
//! and modal submissions) arrives form-encoded with a single `payload`
//! field holding JSON.

use serde::Deserialize;
use std::collections::HashMap;

// ============================================================================
// Events API
// ============================================================================

/// Outer envelope of an Events API request
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventEnvelope {
    UrlVerification { challenge: String },
    EventCallback { event: Event },
    #[serde(other)]
    Other,
}

/// Inner event of an `event_callback`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    pub user: Option<String>,
    pub channel: Option<String>,
    pub channel_type: Option<String>,
    pub bot_id: Option<String>,
    pub subtype: Option<String>,
}

impl Event {
    /// `(user, channel)` when this event should be answered with the menu
    ///
    /// Mentions are always answered. Messages are answered only when they
    /// come from a person: no bot id and no subtype (edits, joins, ...).
    pub fn greeting_target(&self) -> Option<(&str, &str)> {
        let wanted = match self.kind.as_str() {
            "app_mention" => true,
            "message" => self.bot_id.is_none() && self.subtype.is_none(),
            _ => false,
        };
        if !wanted {
            return None;
        }
        Some((self.user.as_deref()?, self.channel.as_deref()?))
    }
}

// ============================================================================
// Interactivity
// ============================================================================

/// Form-encoded body of an interactivity request
#[derive(Debug, Deserialize)]
pub struct InteractionForm {
    pub payload: String,
}

/// Decoded `payload` of an interactivity request
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    BlockActions(BlockActions),
    ViewSubmission(ViewSubmission),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub ts: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Action {
    pub action_id: String,
    pub value: Option<String>,
}

/// A button click on a message
#[derive(Debug, Clone, Deserialize)]
pub struct BlockActions {
    pub user: UserRef,
    pub trigger_id: String,
    pub channel: Option<ChannelRef>,
    pub message: Option<MessageRef>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A submitted modal
#[derive(Debug, Clone, Deserialize)]
pub struct ViewSubmission {
    pub user: UserRef,
    pub view: View,
}

#[derive(Debug, Clone, Deserialize)]
pub struct View {
    pub callback_id: String,
    /// Channel the modal was opened from
    #[serde(default)]
    pub private_metadata: String,
    pub state: ViewState,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewState {
    /// block id -> action id -> element state
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, ElementState>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOption {
    pub value: String,
}

/// State of one input element
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementState {
    /// Text inputs
    pub value: Option<String>,
    /// Static selects
    pub selected_option: Option<SelectedOption>,
}

impl ViewState {
    /// Entered or selected value of an element
    pub fn value(&self, block_id: &str, action_id: &str) -> Option<String> {
        let element = self.values.get(block_id)?.get(action_id)?;
        element
            .value
            .clone()
            .or_else(|| element.selected_option.as_ref().map(|option| option.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_verification() {
        let envelope: EventEnvelope =
            serde_json::from_value(json!({"type": "url_verification", "challenge": "abc", "token": "t"})).unwrap();
        assert!(matches!(envelope, EventEnvelope::UrlVerification { challenge } if challenge == "abc"));
    }

    #[test]
    fn test_unknown_envelope_type() {
        let envelope: EventEnvelope = serde_json::from_value(json!({"type": "app_rate_limited"})).unwrap();
        assert!(matches!(envelope, EventEnvelope::Other));
    }

    #[test]
    fn test_direct_message_gets_greeting() {
        let event: Event = serde_json::from_value(json!({
            "type": "message", "user": "U1", "channel": "D1", "channel_type": "im", "text": "hi"
        }))
        .unwrap();
        assert_eq!(event.greeting_target(), Some(("U1", "D1")));
    }

    #[test]
    fn test_bot_and_edited_messages_are_ignored() {
        let from_bot: Event = serde_json::from_value(json!({
            "type": "message", "user": "U1", "channel": "D1", "bot_id": "B1"
        }))
        .unwrap();
        let edited: Event = serde_json::from_value(json!({
            "type": "message", "channel": "D1", "subtype": "message_changed"
        }))
        .unwrap();
        assert_eq!(from_bot.greeting_target(), None);
        assert_eq!(edited.greeting_target(), None);
    }

    #[test]
    fn test_view_state_reads_inputs_and_selects() {
        let submission: Interaction = serde_json::from_value(json!({
            "type": "view_submission",
            "user": {"id": "U1"},
            "view": {
                "callback_id": "vital_view_form",
                "private_metadata": "C1",
                "state": {"values": {
                    "gender_block": {"gender_select": {"type": "static_select", "selected_option": {"value": "male"}}},
                    "age_block": {"age_input": {"type": "plain_text_input", "value": "35"}},
                    "weight_block": {"weight_input": {"type": "plain_text_input", "value": null}}
                }}
            }
        }))
        .unwrap();
        let Interaction::ViewSubmission(submission) = submission else {
            panic!("expected a view submission");
        };
        let state = &submission.view.state;
        assert_eq!(state.value("gender_block", "gender_select").as_deref(), Some("male"));
        assert_eq!(state.value("age_block", "age_input").as_deref(), Some("35"));
        assert_eq!(state.value("weight_block", "weight_input"), None);
        assert_eq!(state.value("height_block", "height_input"), None);
    }

    #[test]
    fn test_block_actions() {
        let interaction: Interaction = serde_json::from_value(json!({
            "type": "block_actions",
            "user": {"id": "U1"},
            "trigger_id": "T.1",
            "channel": {"id": "C1"},
            "message": {"ts": "1700000000.000100"},
            "actions": [{"action_id": "longevity", "value": "longevity", "type": "button"}]
        }))
        .unwrap();
        let Interaction::BlockActions(actions) = interaction else {
            panic!("expected block actions");
        };
        assert_eq!(actions.actions[0].action_id, "longevity");
        assert_eq!(actions.message.unwrap().ts, "1700000000.000100");
    }
}
