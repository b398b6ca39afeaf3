//! Argument checks applied identically by every provider implementation

use chrono::{DateTime, Utc};
use lk_shared::phone::is_valid_phone_number;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{NewAutoReply, NewContact};
use crate::errors::{DomainError, DomainResult};
use crate::services::segmentation::MAX_MESSAGE_LENGTH;

pub const DEFAULT_HISTORY_LIMIT: usize = 20;
pub const MAX_HISTORY_LIMIT: usize = 100;
pub const MAX_AUTO_REPLY_LENGTH: usize = 160;

static KEYWORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,20}$").unwrap());

/// Message content must be non-blank and at most 1600 characters
pub fn validate_message_content(content: &str) -> DomainResult<()> {
    if content.trim().is_empty() {
        return Err(DomainError::required("Message content"));
    }
    let length = content.chars().count();
    if length > MAX_MESSAGE_LENGTH {
        return Err(DomainError::validation(format!(
            "Message content exceeds maximum length of {} characters ({} given)",
            MAX_MESSAGE_LENGTH, length
        ))
        .with_details(serde_json::json!({ "max": MAX_MESSAGE_LENGTH, "actual": length })));
    }
    Ok(())
}

/// A scheduled send must lie in the future
pub fn validate_schedule(scheduled_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DomainResult<()> {
    match scheduled_at {
        Some(at) if at <= now => Err(DomainError::validation(
            "Scheduled time must be in the future",
        )
        .with_details(serde_json::json!({ "field": "scheduledAt" }))),
        _ => Ok(()),
    }
}

/// Identifiers must be non-blank
pub fn require_id(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::required(field));
    }
    Ok(())
}

/// Phone must be E.164; email, when present, must look like one
pub fn validate_new_contact(contact: &NewContact) -> DomainResult<()> {
    if contact.phone.trim().is_empty() {
        return Err(DomainError::required("Phone number"));
    }
    if !is_valid_phone_number(contact.phone.trim()) {
        return Err(DomainError::validation(
            "Phone number must be in E.164 format (e.g., +14155552671)",
        )
        .with_details(serde_json::json!({ "field": "phone" })));
    }
    if let Some(email) = contact.email.as_deref() {
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(DomainError::validation("Invalid email address")
                .with_details(serde_json::json!({ "field": "email" })));
        }
    }
    Ok(())
}

/// Validate an auto-reply and normalise its keyword to upper case
pub fn normalize_auto_reply(auto_reply: NewAutoReply) -> DomainResult<NewAutoReply> {
    let keyword = auto_reply.keyword.trim();
    if keyword.is_empty() {
        return Err(DomainError::required("Keyword"));
    }
    if !KEYWORD_REGEX.is_match(keyword) {
        return Err(DomainError::validation(
            "Keyword must be a single word of 1-20 letters or digits",
        )
        .with_details(serde_json::json!({ "field": "keyword" })));
    }

    let response = auto_reply.response.trim();
    if response.is_empty() {
        return Err(DomainError::required("Response"));
    }
    if response.chars().count() > MAX_AUTO_REPLY_LENGTH {
        return Err(DomainError::validation(format!(
            "Response exceeds maximum length of {} characters",
            MAX_AUTO_REPLY_LENGTH
        )));
    }

    Ok(NewAutoReply {
        keyword: keyword.to_uppercase(),
        response: response.to_string(),
        list_id: auto_reply
            .list_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()),
    })
}

/// Clamp a history page size to `1..=100`
pub fn clamp_history_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_HISTORY_LIMIT)
}
