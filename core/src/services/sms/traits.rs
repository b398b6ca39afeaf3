//! Contract shared by the mock and the real SMS marketing provider

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    AccountBalance, AutoReply, CampaignStats, Contact, Message, NewAutoReply, NewContact,
    SmsList, WebhookExample, WebhookOutcome, WebhookPayload,
};
use crate::errors::{DomainError, DomainResult, ErrorKind};

/// SMS marketing operations
///
/// Implementations include:
/// - the in-memory mock provider used in development and tests
/// - the HTTP client for the live provider
///
/// Both must report the same success and failure shapes so that callers can
/// only tell them apart through the service switch.
#[async_trait]
pub trait SmsMarketingService: Send + Sync {
    /// Send (or schedule) a message to every subscriber of a list
    async fn send_message(
        &self,
        list_id: &str,
        content: &str,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Message>;

    /// Most recent messages first, optionally restricted to one list
    async fn get_message_history(
        &self,
        list_id: Option<&str>,
        limit: usize,
    ) -> DomainResult<Vec<Message>>;

    /// Subscribe a phone number to a list
    async fn subscribe_contact(&self, list_id: &str, contact: NewContact) -> DomainResult<Contact>;

    async fn get_contacts(&self, list_id: &str) -> DomainResult<Vec<Contact>>;

    async fn get_campaign_stats(&self, campaign_id: &str) -> DomainResult<CampaignStats>;

    async fn get_lists(&self) -> DomainResult<Vec<SmsList>>;

    async fn delete_subscriber(&self, list_id: &str, subscriber_id: &str) -> DomainResult<()>;

    async fn get_auto_replies(&self) -> DomainResult<Vec<AutoReply>>;

    async fn create_auto_reply(&self, auto_reply: NewAutoReply) -> DomainResult<AutoReply>;

    /// Check a webhook signature against the raw request body
    async fn verify_webhook(&self, payload: &[u8], signature: &str) -> DomainResult<bool>;

    async fn process_webhook(&self, payload: WebhookPayload) -> DomainResult<WebhookOutcome>;

    async fn get_account_balance(&self) -> DomainResult<AccountBalance>;

    /// Provider name for logs and health output
    fn provider_name(&self) -> &str;
}

/// Sandbox-only operations, implemented by the mock provider alone
#[async_trait]
pub trait SandboxOperations: Send + Sync {
    /// A representative error of the requested kind, for client error handling
    async fn generate_test_error(&self, kind: ErrorKind) -> DomainError;

    /// Sample webhook payloads for every supported event type
    async fn list_webhook_examples(&self) -> Vec<WebhookExample>;
}
