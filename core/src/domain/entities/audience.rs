//! Subscriber lists and the contacts subscribed to them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named audience that messages are sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsList {
    /// Provider identifier (e.g. `list_001`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional description shown in the dashboard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of currently subscribed contacts
    pub subscriber_count: u32,

    /// Timestamp when the list was created
    pub created_at: DateTime<Utc>,
}

/// Subscription state of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Subscribed,
    Unsubscribed,
}

/// A phone number subscribed to a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Subscriber identifier (e.g. `sub_001`)
    pub id: String,

    /// List the contact belongs to
    pub list_id: String,

    /// E.164 phone number
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub status: SubscriptionStatus,

    pub subscribed_at: DateTime<Utc>,
}

impl Contact {
    /// Whether messages sent to the list reach this contact
    pub fn is_subscribed(&self) -> bool {
        self.status == SubscriptionStatus::Subscribed
    }
}

/// Input for subscribing a contact to a list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl NewContact {
    /// Contact with only a phone number
    pub fn with_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            ..Default::default()
        }
    }
}
