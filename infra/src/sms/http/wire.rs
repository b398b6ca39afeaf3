//! Request and response bodies exchanged with the provider REST API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lk_core::services::segmentation::Encoding;

/// Successful responses wrap their payload in `data`
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error bodies carry either `message` or `error`
#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProviderErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest<'a> {
    pub list_id: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Local segmentation, so provider and caller agree on cost
    pub segments: usize,
    pub encoding: Encoding,
}
