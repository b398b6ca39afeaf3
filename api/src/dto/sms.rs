use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use lk_core::domain::entities::{NewAutoReply, NewContact};
use lk_core::errors::ErrorKind;
use lk_core::services::segmentation::{SegmentationResult, MAX_MESSAGE_LENGTH};
use lk_core::services::sms::ServiceMode;
use lk_shared::phone::is_valid_phone_number;

fn e164(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(phone.trim()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("e164");
        error.message = Some("Phone number must be in E.164 format (e.g., +14155552671)".into());
        Err(error)
    }
}

fn single_word(keyword: &str) -> Result<(), ValidationError> {
    if keyword.trim().chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("keyword");
        error.message = Some("Keyword must contain only letters and digits".into());
        Err(error)
    }
}

/// POST /sms/segments
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRequest {
    #[validate(length(max = 1600, message = "Message must be at most 1600 characters"))]
    pub message: String,

    /// Recipients to price the message for
    #[serde(default)]
    #[validate(range(min = 1, max = 1000000))]
    pub recipients: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPreview {
    #[serde(flatten)]
    pub segmentation: SegmentationResult,
    pub segment_count: usize,
    pub recipients: u32,
    /// `totalCost × recipients`
    pub estimated_cost: f64,
    pub max_length: usize,
}

impl SegmentPreview {
    pub fn new(segmentation: SegmentationResult, recipients: u32) -> Self {
        let estimated_cost = segmentation.total_cost * f64::from(recipients);
        Self {
            segment_count: segmentation.segment_count(),
            segmentation,
            recipients,
            estimated_cost,
            max_length: MAX_MESSAGE_LENGTH,
        }
    }
}

/// POST /sms/messages
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "List ID is required"))]
    pub list_id: String,

    #[validate(length(min = 1, max = 1600, message = "Content must be 1-1600 characters"))]
    pub content: String,

    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// GET /sms/messages
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageHistoryQuery {
    pub list_id: Option<String>,
    pub limit: Option<usize>,
}

/// POST /sms/lists/{id}/contacts
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeContactRequest {
    #[validate(custom(function = "e164"))]
    pub phone: String,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

impl From<SubscribeContactRequest> for NewContact {
    fn from(request: SubscribeContactRequest) -> Self {
        NewContact {
            phone: request.phone.trim().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

/// POST /sms/auto-replies
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoReplyRequest {
    #[validate(
        length(min = 1, max = 20, message = "Keyword must be 1-20 characters"),
        custom(function = "single_word")
    )]
    pub keyword: String,

    #[validate(length(min = 1, max = 160, message = "Response must be 1-160 characters"))]
    pub response: String,

    #[serde(default)]
    pub list_id: Option<String>,
}

impl From<CreateAutoReplyRequest> for NewAutoReply {
    fn from(request: CreateAutoReplyRequest) -> Self {
        NewAutoReply {
            keyword: request.keyword,
            response: request.response,
            list_id: request.list_id,
        }
    }
}

/// POST /sms/mode
#[derive(Debug, Clone, Deserialize)]
pub struct SetModeRequest {
    pub mode: ServiceMode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeResponse {
    pub mode: ServiceMode,
    pub mocking: bool,
    pub provider: String,
}

/// POST /sms/sandbox/errors
#[derive(Debug, Clone, Deserialize)]
pub struct TestErrorRequest {
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub sms_mode: ServiceMode,
    pub sms_provider: String,
}
