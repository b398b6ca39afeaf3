//! Outbound messages sent to a list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::segmentation::Encoding;

/// Lifecycle state of an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Queued,
    Scheduled,
    Sent,
    Delivered,
    Failed,
}

/// A message sent (or scheduled) to every subscriber of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message identifier (e.g. `msg_0001`)
    pub id: String,

    pub list_id: String,

    pub content: String,

    pub status: MessageStatus,

    /// Number of subscribers the message goes to
    pub recipients: u32,

    /// Segments per recipient
    pub segments: u32,

    /// Encoding class of the content
    pub encoding: Encoding,

    /// Segment cost multiplied by recipients
    pub estimated_cost: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}
