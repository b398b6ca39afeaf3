//! Inbound provider webhooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{DomainError, DomainResult};

pub const EVENT_MESSAGE_RECEIVED: &str = "message.received";
pub const EVENT_MESSAGE_DELIVERED: &str = "message.delivered";
pub const EVENT_MESSAGE_FAILED: &str = "message.failed";
pub const EVENT_CONTACT_UNSUBSCRIBED: &str = "contact.unsubscribed";

/// Raw webhook body as posted by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub event_type: String,

    #[serde(default)]
    pub data: Value,
}

impl WebhookPayload {
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }
}

/// Typed view of a webhook payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEvent {
    MessageReceived {
        from: String,
        text: String,
        list_id: Option<String>,
    },
    MessageDelivered {
        message_id: String,
    },
    MessageFailed {
        message_id: String,
        reason: Option<String>,
    },
    ContactUnsubscribed {
        list_id: String,
        phone: String,
    },
    /// Event types we accept but do not act on
    Unknown {
        event_type: String,
    },
}

impl WebhookEvent {
    /// Parse the payload, failing with a validation error on missing fields
    pub fn from_payload(payload: &WebhookPayload) -> DomainResult<Self> {
        let data = &payload.data;
        let event = match payload.event_type.as_str() {
            EVENT_MESSAGE_RECEIVED => WebhookEvent::MessageReceived {
                from: required_str(data, "from")?,
                text: required_str(data, "text")?,
                list_id: optional_str(data, "listId"),
            },
            EVENT_MESSAGE_DELIVERED => WebhookEvent::MessageDelivered {
                message_id: required_str(data, "messageId")?,
            },
            EVENT_MESSAGE_FAILED => WebhookEvent::MessageFailed {
                message_id: required_str(data, "messageId")?,
                reason: optional_str(data, "reason"),
            },
            EVENT_CONTACT_UNSUBSCRIBED => WebhookEvent::ContactUnsubscribed {
                list_id: required_str(data, "listId")?,
                phone: required_str(data, "phone")?,
            },
            "" => return Err(DomainError::required("webhook type")),
            other => WebhookEvent::Unknown {
                event_type: other.to_string(),
            },
        };
        Ok(event)
    }

    pub fn event_type(&self) -> &str {
        match self {
            WebhookEvent::MessageReceived { .. } => EVENT_MESSAGE_RECEIVED,
            WebhookEvent::MessageDelivered { .. } => EVENT_MESSAGE_DELIVERED,
            WebhookEvent::MessageFailed { .. } => EVENT_MESSAGE_FAILED,
            WebhookEvent::ContactUnsubscribed { .. } => EVENT_CONTACT_UNSUBSCRIBED,
            WebhookEvent::Unknown { event_type } => event_type,
        }
    }
}

fn required_str(data: &Value, field: &str) -> DomainResult<String> {
    optional_str(data, field).ok_or_else(|| DomainError::required(&format!("data.{}", field)))
}

fn optional_str(data: &Value, field: &str) -> Option<String> {
    data.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Result of processing a webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookOutcome {
    pub event_type: String,
    /// Whether the event caused any action
    pub handled: bool,
    /// Short description of what was done
    pub action: String,
    /// Auto-reply text to send back, for inbound messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_reply: Option<String>,
}

impl WebhookOutcome {
    pub fn handled(event_type: &str, action: impl Into<String>) -> Self {
        Self {
            event_type: event_type.to_string(),
            handled: true,
            action: action.into(),
            auto_reply: None,
        }
    }

    pub fn ignored(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            handled: false,
            action: "ignored".to_string(),
            auto_reply: None,
        }
    }

    pub fn with_auto_reply(mut self, response: impl Into<String>) -> Self {
        self.auto_reply = Some(response.into());
        self
    }
}

/// Sample payload offered by the sandbox for client development
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookExample {
    pub event_type: String,
    pub description: String,
    pub payload: WebhookPayload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_parse_message_received() {
        let payload = WebhookPayload::new(
            EVENT_MESSAGE_RECEIVED,
            json!({ "from": "+14155550100", "text": "JOIN", "listId": "list_001" }),
        );
        let event = WebhookEvent::from_payload(&payload).unwrap();
        assert_eq!(
            event,
            WebhookEvent::MessageReceived {
                from: "+14155550100".to_string(),
                text: "JOIN".to_string(),
                list_id: Some("list_001".to_string()),
            }
        );
        assert_eq!(event.event_type(), EVENT_MESSAGE_RECEIVED);
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let payload = WebhookPayload::new(EVENT_MESSAGE_DELIVERED, json!({}));
        let error = WebhookEvent::from_payload(&payload).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Validation);
        assert!(error.message.contains("data.messageId"));
    }

    #[test]
    fn test_unknown_event_type_is_accepted() {
        let payload = WebhookPayload::new("campaign.finished", Value::Null);
        let event = WebhookEvent::from_payload(&payload).unwrap();
        assert_eq!(event.event_type(), "campaign.finished");
    }

    #[test]
    fn test_payload_uses_type_field() {
        let payload: WebhookPayload =
            serde_json::from_str(r#"{"type":"message.failed","data":{"messageId":"msg_1"}}"#)
                .unwrap();
        assert_eq!(payload.event_type, EVENT_MESSAGE_FAILED);
    }
}
