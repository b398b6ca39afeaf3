//! Live SMS marketing provider over its REST API
//!
//! ## Behaviour
//!
//! - `Basic base64(public_key:private_key)` on every request
//! - A fixed per-request timeout; timeouts surface as a 504-hinted error
//! - 400/422 map to Validation, 401/403 to Auth, 404 to NotFound, 409 to
//!   Conflict, 429 to RateLimit with `Retry-After`; anything else of 400 and
//!   above is ExternalApi. The provider status is kept in `details`
//! - Missing base URL or credentials fail before any request is built

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use lk_core::domain::entities::{
    AccountBalance, AutoReply, CampaignStats, Contact, Message, NewAutoReply, NewContact,
    SmsList, WebhookEvent, WebhookOutcome, WebhookPayload,
};
use lk_core::errors::{DomainError, DomainResult, ErrorKind};
use lk_core::services::segmentation::segment;
use lk_core::services::sms::{
    clamp_history_limit, find_auto_reply, normalize_auto_reply, require_id,
    validate_message_content, validate_new_contact, validate_schedule, verify_signature,
    SmsMarketingService,
};
use lk_shared::phone::mask_phone_number;
use lk_shared::SmsConfig;

use super::wire::{DataEnvelope, ProviderErrorBody, SendMessageRequest};
use crate::InfrastructureError;

/// REST client for the live provider
pub struct HttpSmsMarketingService {
    client: Client,
    base_url: Option<String>,
    authorization: Option<String>,
    webhook_secret: Option<String>,
}

impl HttpSmsMarketingService {
    /// Build the client; missing credentials are reported per call, not here
    pub fn new(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let authorization = match (config.public_key.as_deref(), config.private_key.as_deref()) {
            (Some(public), Some(private)) => Some(format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", public, private))
            )),
            _ => None,
        };

        if authorization.is_some() && config.base_url.is_some() {
            info!(
                timeout_secs = config.request_timeout_secs,
                "HTTP SMS marketing service initialized"
            );
        } else {
            warn!("HTTP SMS marketing service has no credentials; real mode calls will fail");
        }

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            authorization,
            webhook_secret: config.webhook_secret.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.authorization.is_some()
    }

    fn endpoint(&self, segments: &[&str]) -> DomainResult<Url> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| DomainError::not_configured("SMS_API_BASE_URL"))?;
        let mut url = Url::parse(base).map_err(|e| {
            DomainError::not_configured("a valid SMS_API_BASE_URL")
                .with_details(serde_json::json!({ "reason": e.to_string() }))
        })?;
        url.path_segments_mut()
            .map_err(|_| DomainError::not_configured("a valid SMS_API_BASE_URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> DomainResult<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let authorization = self
            .authorization
            .as_deref()
            .ok_or_else(|| DomainError::not_configured("SMS_PUBLIC_KEY/SMS_PRIVATE_KEY"))?;

        debug!(operation, method = %method, path = url.path(), "Calling SMS provider");

        let mut request = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, authorization);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                warn!(operation, "SMS provider request timed out");
                DomainError::timeout(operation)
            } else {
                warn!(operation, error = %e, "SMS provider request failed");
                DomainError::external_api(format!("SMS provider request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let text = response.text().await.unwrap_or_default();
            let error = map_error_response(status, &headers, &text);
            warn!(
                operation,
                status = status.as_u16(),
                kind = %error.kind,
                "SMS provider returned an error"
            );
            return Err(error);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let text = response.text().await.map_err(|e| {
            DomainError::external_api(format!("Failed to read SMS provider response: {}", e))
        })?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let envelope: DataEnvelope<T> = serde_json::from_str(&text).map_err(|e| {
            DomainError::external_api(format!("Invalid response from SMS provider: {}", e))
        })?;
        Ok(Some(envelope.data))
    }

    /// Request whose success body must carry `data`
    async fn fetch<B, T>(
        &self,
        operation: &'static str,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> DomainResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.send(operation, method, segments, query, body)
            .await?
            .ok_or_else(|| DomainError::external_api("SMS provider returned an empty response"))
    }
}

/// Translate a provider error response into a domain error
///
/// Client-side statuses keep the kind the mock provider reports for the same
/// situation; `providerStatus` is always attached.
pub(crate) fn map_error_response(status: StatusCode, headers: &HeaderMap, body: &str) -> DomainError {
    let provider_message = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(ProviderErrorBody::into_message);
    let code = status.as_u16();
    let details = serde_json::json!({ "providerStatus": code });
    let message_or = |fallback: &str| {
        provider_message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = headers
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            DomainError::rate_limited(retry_after).with_details(details)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            DomainError::auth(message_or("SMS provider rejected the credentials"))
                .with_details(details)
        }
        StatusCode::NOT_FOUND => DomainError::new(
            ErrorKind::NotFound,
            message_or("Resource not found at SMS provider"),
        )
        .with_details(details),
        StatusCode::CONFLICT => {
            DomainError::conflict(message_or("SMS provider reported a conflict"))
                .with_details(details)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DomainError::validation(message_or("SMS provider rejected the request"))
                .with_details(details)
        }
        _ => DomainError::provider_status(
            code,
            match provider_message {
                Some(message) => format!("SMS provider error ({}): {}", code, message),
                None => format!("SMS provider error ({})", code),
            },
        ),
    }
}

const NO_BODY: Option<&()> = None;

#[async_trait]
impl SmsMarketingService for HttpSmsMarketingService {
    async fn send_message(
        &self,
        list_id: &str,
        content: &str,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Message> {
        require_id("List ID", list_id)?;
        validate_message_content(content)?;
        validate_schedule(scheduled_at, Utc::now())?;

        let segmentation = segment(content);
        let request = SendMessageRequest {
            list_id,
            content,
            scheduled_at,
            segments: segmentation.segment_count(),
            encoding: segmentation.encoding,
        };
        let message: Message = self
            .fetch("send_message", Method::POST, &["messages"], &[], Some(&request))
            .await?;

        info!(
            message_id = %message.id,
            list_id,
            segments = message.segments,
            "SMS message accepted by provider"
        );
        Ok(message)
    }

    async fn get_message_history(
        &self,
        list_id: Option<&str>,
        limit: usize,
    ) -> DomainResult<Vec<Message>> {
        let mut query = vec![("limit", clamp_history_limit(limit).to_string())];
        if let Some(list_id) = list_id {
            require_id("List ID", list_id)?;
            query.push(("listId", list_id.to_string()));
        }
        self.fetch("get_message_history", Method::GET, &["messages"], &query, NO_BODY)
            .await
    }

    async fn subscribe_contact(&self, list_id: &str, contact: NewContact) -> DomainResult<Contact> {
        require_id("List ID", list_id)?;
        validate_new_contact(&contact)?;
        let contact = NewContact {
            phone: contact.phone.trim().to_string(),
            ..contact
        };

        let created: Contact = self
            .fetch(
                "subscribe_contact",
                Method::POST,
                &["lists", list_id, "contacts"],
                &[],
                Some(&contact),
            )
            .await?;

        info!(
            contact_id = %created.id,
            list_id,
            phone = %mask_phone_number(&created.phone),
            "Contact subscribed with provider"
        );
        Ok(created)
    }

    async fn get_contacts(&self, list_id: &str) -> DomainResult<Vec<Contact>> {
        require_id("List ID", list_id)?;
        self.fetch(
            "get_contacts",
            Method::GET,
            &["lists", list_id, "contacts"],
            &[],
            NO_BODY,
        )
        .await
    }

    async fn get_campaign_stats(&self, campaign_id: &str) -> DomainResult<CampaignStats> {
        require_id("Campaign ID", campaign_id)?;
        self.fetch(
            "get_campaign_stats",
            Method::GET,
            &["campaigns", campaign_id, "stats"],
            &[],
            NO_BODY,
        )
        .await
    }

    async fn get_lists(&self) -> DomainResult<Vec<SmsList>> {
        self.fetch("get_lists", Method::GET, &["lists"], &[], NO_BODY)
            .await
    }

    async fn delete_subscriber(&self, list_id: &str, subscriber_id: &str) -> DomainResult<()> {
        require_id("List ID", list_id)?;
        require_id("Subscriber ID", subscriber_id)?;
        self.send::<(), serde_json::Value>(
            "delete_subscriber",
            Method::DELETE,
            &["lists", list_id, "contacts", subscriber_id],
            &[],
            None,
        )
        .await?;
        info!(subscriber_id, list_id, "Subscriber deleted with provider");
        Ok(())
    }

    async fn get_auto_replies(&self) -> DomainResult<Vec<AutoReply>> {
        self.fetch("get_auto_replies", Method::GET, &["auto-replies"], &[], NO_BODY)
            .await
    }

    async fn create_auto_reply(&self, auto_reply: NewAutoReply) -> DomainResult<AutoReply> {
        let auto_reply = normalize_auto_reply(auto_reply)?;
        self.fetch(
            "create_auto_reply",
            Method::POST,
            &["auto-replies"],
            &[],
            Some(&auto_reply),
        )
        .await
    }

    async fn verify_webhook(&self, payload: &[u8], signature: &str) -> DomainResult<bool> {
        let secret = self
            .webhook_secret
            .as_deref()
            .ok_or_else(|| DomainError::not_configured("SMS_WEBHOOK_SECRET"))?;
        Ok(verify_signature(secret, payload, signature))
    }

    async fn process_webhook(&self, payload: WebhookPayload) -> DomainResult<WebhookOutcome> {
        let event = WebhookEvent::from_payload(&payload)?;
        let event_type = event.event_type().to_string();

        let outcome = match event {
            WebhookEvent::MessageReceived { from, text, list_id } => {
                let replies = self.get_auto_replies().await?;
                match find_auto_reply(&replies, &text, list_id.as_deref()) {
                    Some(reply) => {
                        info!(
                            from = %mask_phone_number(&from),
                            keyword = %reply.keyword,
                            "Auto-reply matched inbound message"
                        );
                        WebhookOutcome::handled(&event_type, "auto_reply_sent")
                            .with_auto_reply(reply.response.clone())
                    }
                    None => WebhookOutcome::handled(&event_type, "message_logged"),
                }
            }
            WebhookEvent::Unknown { .. } => WebhookOutcome::ignored(&event_type),
            _ => WebhookOutcome::handled(&event_type, "acknowledged"),
        };
        debug!(event_type = %event_type, handled = outcome.handled, "Webhook processed");
        Ok(outcome)
    }

    async fn get_account_balance(&self) -> DomainResult<AccountBalance> {
        self.fetch(
            "get_account_balance",
            Method::GET,
            &["account", "balance"],
            &[],
            NO_BODY,
        )
        .await
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
