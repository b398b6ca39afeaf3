//! In-memory SMS marketing provider for development, demos and tests
//!
//! Seeded from `sample_data`, mutated in place, never touches the network.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use lk_core::domain::entities::{
    AccountBalance, AutoReply, CampaignStats, Contact, Message, MessageStatus, NewAutoReply,
    NewContact, SmsList, SubscriptionStatus, WebhookEvent, WebhookExample, WebhookOutcome,
    WebhookPayload,
};
use lk_core::errors::{DomainError, DomainResult, ErrorKind};
use lk_core::services::segmentation::{segment, GSM7_SEGMENT_COST};
use lk_core::services::sms::{
    clamp_history_limit, find_auto_reply, normalize_auto_reply, require_id,
    validate_message_content, validate_new_contact, validate_schedule, verify_signature,
    SandboxOperations, SmsMarketingService,
};
use lk_shared::phone::mask_phone_number;
use lk_shared::SmsConfig;

use super::sample_data;

/// Secret the mock provider signs webhooks with
pub const MOCK_WEBHOOK_SECRET: &str = "whsec_mock_launchkit";

/// Default artificial latency per operation
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(100);

const LIST: &str = "SMS list";
const CAMPAIGN: &str = "Campaign";
const SUBSCRIBER: &str = "Subscriber";

struct MockStore {
    lists: Vec<SmsList>,
    contacts: Vec<Contact>,
    messages: Vec<Message>,
    campaigns: Vec<CampaignStats>,
    auto_replies: Vec<AutoReply>,
    balance: f64,
}

impl MockStore {
    fn seeded() -> Self {
        Self {
            lists: sample_data::lists(),
            contacts: sample_data::contacts(),
            messages: sample_data::messages(),
            campaigns: sample_data::campaigns(),
            auto_replies: sample_data::auto_replies(),
            balance: sample_data::SAMPLE_BALANCE,
        }
    }

    fn list(&self, list_id: &str) -> DomainResult<&SmsList> {
        self.lists
            .iter()
            .find(|l| l.id == list_id)
            .ok_or_else(|| DomainError::not_found(LIST, list_id))
    }

    fn adjust_subscribers(&mut self, list_id: &str, subscribed: bool) {
        if let Some(list) = self.lists.iter_mut().find(|l| l.id == list_id) {
            list.subscriber_count = if subscribed {
                list.subscriber_count + 1
            } else {
                list.subscriber_count.saturating_sub(1)
            };
        }
    }

    fn set_message_status(&mut self, message_id: &str, status: MessageStatus) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.status = status;
                true
            }
            None => false,
        }
    }
}

/// Mock SMS marketing provider
pub struct MockSmsMarketingService {
    store: RwLock<MockStore>,
    next_id: AtomicU64,
    delay: Duration,
    webhook_secret: String,
}

impl MockSmsMarketingService {
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_MOCK_DELAY)
    }

    /// Mock with a custom artificial latency; zero disables it
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            store: RwLock::new(MockStore::seeded()),
            next_id: AtomicU64::new(1),
            delay,
            webhook_secret: MOCK_WEBHOOK_SECRET.to_string(),
        }
    }

    pub fn from_config(config: &SmsConfig) -> Self {
        let service = Self::with_delay(Duration::from_millis(config.mock_delay_ms));
        info!(delay_ms = config.mock_delay_ms, "Mock SMS marketing service initialized");
        service
    }

    pub fn webhook_secret(&self) -> &str {
        &self.webhook_secret
    }

    /// Restore the seeded data set
    pub async fn reset(&self) {
        *self.store.write().await = MockStore::seeded();
        self.next_id.store(1, Ordering::SeqCst);
        debug!("Mock SMS store reset");
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{}_mock_{:04}", prefix, n)
    }
}

impl Default for MockSmsMarketingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsMarketingService for MockSmsMarketingService {
    async fn send_message(
        &self,
        list_id: &str,
        content: &str,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Message> {
        self.simulate_latency().await;
        require_id("List ID", list_id)?;
        validate_message_content(content)?;
        let now = Utc::now();
        validate_schedule(scheduled_at, now)?;

        let mut store = self.store.write().await;
        let recipients = store.list(list_id)?.subscriber_count;
        let segmentation = segment(content);

        let message = Message {
            id: self.next_id("msg"),
            list_id: list_id.to_string(),
            content: content.to_string(),
            status: if scheduled_at.is_some() {
                MessageStatus::Scheduled
            } else {
                MessageStatus::Queued
            },
            recipients,
            segments: segmentation.segment_count() as u32,
            encoding: segmentation.encoding,
            estimated_cost: segmentation.total_cost * f64::from(recipients),
            scheduled_at,
            created_at: now,
        };
        store.messages.push(message.clone());

        info!(
            message_id = %message.id,
            list_id,
            recipients,
            segments = message.segments,
            encoding = %message.encoding,
            "Mock SMS message accepted"
        );
        Ok(message)
    }

    async fn get_message_history(
        &self,
        list_id: Option<&str>,
        limit: usize,
    ) -> DomainResult<Vec<Message>> {
        self.simulate_latency().await;
        let store = self.store.read().await;
        if let Some(list_id) = list_id {
            require_id("List ID", list_id)?;
            store.list(list_id)?;
        }

        Ok(store
            .messages
            .iter()
            .rev()
            .filter(|m| list_id.map_or(true, |id| m.list_id == id))
            .take(clamp_history_limit(limit))
            .cloned()
            .collect())
    }

    async fn subscribe_contact(&self, list_id: &str, contact: NewContact) -> DomainResult<Contact> {
        self.simulate_latency().await;
        require_id("List ID", list_id)?;
        validate_new_contact(&contact)?;
        let phone = contact.phone.trim().to_string();

        let mut store = self.store.write().await;
        store.list(list_id)?;

        let existing = store
            .contacts
            .iter()
            .position(|c| c.list_id == list_id && c.phone == phone);
        let subscribed = match existing {
            Some(index) if store.contacts[index].is_subscribed() => {
                return Err(DomainError::conflict(format!(
                    "Phone number {} is already subscribed to SMS list '{}'",
                    mask_phone_number(&phone),
                    list_id
                ))
                .with_details(serde_json::json!({ "listId": list_id, "field": "phone" })));
            }
            Some(index) => {
                let existing = &mut store.contacts[index];
                existing.status = SubscriptionStatus::Subscribed;
                existing.subscribed_at = Utc::now();
                existing.first_name = contact.first_name.or(existing.first_name.take());
                existing.last_name = contact.last_name.or(existing.last_name.take());
                existing.email = contact.email.or(existing.email.take());
                existing.clone()
            }
            None => {
                let created = Contact {
                    id: self.next_id("contact"),
                    list_id: list_id.to_string(),
                    phone,
                    first_name: contact.first_name,
                    last_name: contact.last_name,
                    email: contact.email,
                    status: SubscriptionStatus::Subscribed,
                    subscribed_at: Utc::now(),
                };
                store.contacts.push(created.clone());
                created
            }
        };
        store.adjust_subscribers(list_id, true);

        info!(
            contact_id = %subscribed.id,
            list_id,
            phone = %mask_phone_number(&subscribed.phone),
            "Mock contact subscribed"
        );
        Ok(subscribed)
    }

    async fn get_contacts(&self, list_id: &str) -> DomainResult<Vec<Contact>> {
        self.simulate_latency().await;
        require_id("List ID", list_id)?;
        let store = self.store.read().await;
        store.list(list_id)?;
        Ok(store
            .contacts
            .iter()
            .filter(|c| c.list_id == list_id)
            .cloned()
            .collect())
    }

    async fn get_campaign_stats(&self, campaign_id: &str) -> DomainResult<CampaignStats> {
        self.simulate_latency().await;
        require_id("Campaign ID", campaign_id)?;
        let store = self.store.read().await;
        store
            .campaigns
            .iter()
            .find(|c| c.campaign_id == campaign_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(CAMPAIGN, campaign_id))
    }

    async fn get_lists(&self) -> DomainResult<Vec<SmsList>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.lists.clone())
    }

    async fn delete_subscriber(&self, list_id: &str, subscriber_id: &str) -> DomainResult<()> {
        self.simulate_latency().await;
        require_id("List ID", list_id)?;
        require_id("Subscriber ID", subscriber_id)?;

        let mut store = self.store.write().await;
        store.list(list_id)?;
        let index = store
            .contacts
            .iter()
            .position(|c| c.list_id == list_id && c.id == subscriber_id)
            .ok_or_else(|| DomainError::not_found(SUBSCRIBER, subscriber_id))?;
        let removed = store.contacts.remove(index);
        if removed.is_subscribed() {
            store.adjust_subscribers(list_id, false);
        }

        info!(subscriber_id, list_id, "Mock subscriber deleted");
        Ok(())
    }

    async fn get_auto_replies(&self) -> DomainResult<Vec<AutoReply>> {
        self.simulate_latency().await;
        Ok(self.store.read().await.auto_replies.clone())
    }

    async fn create_auto_reply(&self, auto_reply: NewAutoReply) -> DomainResult<AutoReply> {
        self.simulate_latency().await;
        let auto_reply = normalize_auto_reply(auto_reply)?;

        let mut store = self.store.write().await;
        if let Some(list_id) = auto_reply.list_id.as_deref() {
            store.list(list_id)?;
        }
        if store.auto_replies.iter().any(|r| r.keyword == auto_reply.keyword) {
            return Err(DomainError::conflict(format!(
                "Auto-reply keyword '{}' already exists",
                auto_reply.keyword
            ))
            .with_details(serde_json::json!({ "field": "keyword" })));
        }

        let created = AutoReply {
            id: self.next_id("reply"),
            keyword: auto_reply.keyword,
            response: auto_reply.response,
            list_id: auto_reply.list_id,
            active: true,
            created_at: Utc::now(),
        };
        store.auto_replies.push(created.clone());

        info!(reply_id = %created.id, keyword = %created.keyword, "Mock auto-reply created");
        Ok(created)
    }

    async fn verify_webhook(&self, payload: &[u8], signature: &str) -> DomainResult<bool> {
        self.simulate_latency().await;
        Ok(verify_signature(&self.webhook_secret, payload, signature))
    }

    async fn process_webhook(&self, payload: WebhookPayload) -> DomainResult<WebhookOutcome> {
        self.simulate_latency().await;
        let event = WebhookEvent::from_payload(&payload)?;
        let event_type = event.event_type().to_string();
        debug!(event_type = %event_type, "Processing mock webhook");

        let outcome = match event {
            WebhookEvent::MessageReceived { from, text, list_id } => {
                let store = self.store.read().await;
                match find_auto_reply(&store.auto_replies, &text, list_id.as_deref()) {
                    Some(reply) => {
                        info!(
                            from = %mask_phone_number(&from),
                            keyword = %reply.keyword,
                            "Mock auto-reply triggered"
                        );
                        WebhookOutcome::handled(&event_type, "auto_reply_sent")
                            .with_auto_reply(reply.response.clone())
                    }
                    None => WebhookOutcome::handled(&event_type, "message_logged"),
                }
            }
            WebhookEvent::MessageDelivered { message_id } => {
                let mut store = self.store.write().await;
                if store.set_message_status(&message_id, MessageStatus::Delivered) {
                    WebhookOutcome::handled(&event_type, "message_marked_delivered")
                } else {
                    WebhookOutcome::ignored(&event_type)
                }
            }
            WebhookEvent::MessageFailed { message_id, .. } => {
                let mut store = self.store.write().await;
                if store.set_message_status(&message_id, MessageStatus::Failed) {
                    WebhookOutcome::handled(&event_type, "message_marked_failed")
                } else {
                    WebhookOutcome::ignored(&event_type)
                }
            }
            WebhookEvent::ContactUnsubscribed { list_id, phone } => {
                let mut store = self.store.write().await;
                let contact = store
                    .contacts
                    .iter_mut()
                    .find(|c| c.list_id == list_id && c.phone == phone && c.is_subscribed());
                match contact {
                    Some(contact) => {
                        contact.status = SubscriptionStatus::Unsubscribed;
                        store.adjust_subscribers(&list_id, false);
                        WebhookOutcome::handled(&event_type, "contact_unsubscribed")
                    }
                    None => WebhookOutcome::ignored(&event_type),
                }
            }
            WebhookEvent::Unknown { .. } => WebhookOutcome::ignored(&event_type),
        };
        Ok(outcome)
    }

    async fn get_account_balance(&self) -> DomainResult<AccountBalance> {
        self.simulate_latency().await;
        let balance = self.store.read().await.balance;
        Ok(AccountBalance::new(
            balance,
            sample_data::SAMPLE_CURRENCY,
            GSM7_SEGMENT_COST,
        ))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl SandboxOperations for MockSmsMarketingService {
    async fn generate_test_error(&self, kind: ErrorKind) -> DomainError {
        self.simulate_latency().await;
        let error = match kind {
            ErrorKind::Validation => DomainError::required("Message content"),
            ErrorKind::Auth => DomainError::auth("Invalid API credentials"),
            ErrorKind::NotFound => DomainError::not_found(LIST, "list_999"),
            ErrorKind::Conflict => DomainError::conflict(
                "Phone number +*******0101 is already subscribed to SMS list 'list_001'",
            ),
            ErrorKind::ExternalApi => {
                DomainError::provider_status(503, "SMS provider temporarily unavailable")
            }
            ErrorKind::RateLimit => DomainError::rate_limited(Some(60)),
            ErrorKind::Internal => DomainError::internal("Unexpected error in SMS sandbox"),
        };
        debug!(kind = %kind, "Generated sandbox test error");
        error
    }

    async fn list_webhook_examples(&self) -> Vec<WebhookExample> {
        self.simulate_latency().await;
        sample_data::webhook_examples()
    }
}
