//! Recording provider used to observe which side of the switch served a call

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use crate::domain::entities::{
    AccountBalance, AutoReply, CampaignStats, Contact, Message, MessageStatus, NewAutoReply,
    NewContact, SmsList, SubscriptionStatus, WebhookExample, WebhookOutcome, WebhookPayload,
};
use crate::errors::{DomainError, DomainResult, ErrorKind};
use crate::services::segmentation::segment;
use crate::services::sms::traits::{SandboxOperations, SmsMarketingService};

pub struct RecordingService {
    pub name: &'static str,
    pub calls: Mutex<Vec<&'static str>>,
    pub failure: Option<DomainError>,
}

impl RecordingService {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(name: &'static str, failure: DomainError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(name)
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> DomainResult<()> {
        self.calls.lock().unwrap().push(operation);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SmsMarketingService for RecordingService {
    async fn send_message(
        &self,
        list_id: &str,
        content: &str,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Message> {
        self.record("send_message")?;
        let segmentation = segment(content);
        Ok(Message {
            id: format!("{}_msg", self.name),
            list_id: list_id.to_string(),
            content: content.to_string(),
            status: if scheduled_at.is_some() {
                MessageStatus::Scheduled
            } else {
                MessageStatus::Queued
            },
            recipients: 1,
            segments: segmentation.segment_count() as u32,
            encoding: segmentation.encoding,
            estimated_cost: segmentation.total_cost,
            scheduled_at,
            created_at: Utc::now(),
        })
    }

    async fn get_message_history(
        &self,
        _list_id: Option<&str>,
        _limit: usize,
    ) -> DomainResult<Vec<Message>> {
        self.record("get_message_history")?;
        Ok(Vec::new())
    }

    async fn subscribe_contact(&self, list_id: &str, contact: NewContact) -> DomainResult<Contact> {
        self.record("subscribe_contact")?;
        Ok(Contact {
            id: format!("{}_contact", self.name),
            list_id: list_id.to_string(),
            phone: contact.phone,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            status: SubscriptionStatus::Subscribed,
            subscribed_at: Utc::now(),
        })
    }

    async fn get_contacts(&self, _list_id: &str) -> DomainResult<Vec<Contact>> {
        self.record("get_contacts")?;
        Ok(Vec::new())
    }

    async fn get_campaign_stats(&self, campaign_id: &str) -> DomainResult<CampaignStats> {
        self.record("get_campaign_stats")?;
        Ok(CampaignStats::from_counts(campaign_id, self.name, 10, 9, 3, 0, 0.075))
    }

    async fn get_lists(&self) -> DomainResult<Vec<SmsList>> {
        self.record("get_lists")?;
        Ok(vec![SmsList {
            id: format!("{}_list", self.name),
            name: self.name.to_string(),
            description: None,
            subscriber_count: 0,
            created_at: Utc::now(),
        }])
    }

    async fn delete_subscriber(&self, _list_id: &str, _subscriber_id: &str) -> DomainResult<()> {
        self.record("delete_subscriber")
    }

    async fn get_auto_replies(&self) -> DomainResult<Vec<AutoReply>> {
        self.record("get_auto_replies")?;
        Ok(Vec::new())
    }

    async fn create_auto_reply(&self, auto_reply: NewAutoReply) -> DomainResult<AutoReply> {
        self.record("create_auto_reply")?;
        Ok(AutoReply {
            id: format!("{}_reply", self.name),
            keyword: auto_reply.keyword,
            response: auto_reply.response,
            list_id: auto_reply.list_id,
            active: true,
            created_at: Utc::now(),
        })
    }

    async fn verify_webhook(&self, _payload: &[u8], _signature: &str) -> DomainResult<bool> {
        self.record("verify_webhook")?;
        Ok(self.name == "mock")
    }

    async fn process_webhook(&self, payload: WebhookPayload) -> DomainResult<WebhookOutcome> {
        self.record("process_webhook")?;
        Ok(WebhookOutcome::handled(&payload.event_type, self.name))
    }

    async fn get_account_balance(&self) -> DomainResult<AccountBalance> {
        self.record("get_account_balance")?;
        Ok(AccountBalance::new(10.0, "USD", 0.0075))
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}

#[async_trait]
impl SandboxOperations for RecordingService {
    async fn generate_test_error(&self, kind: ErrorKind) -> DomainError {
        self.calls.lock().unwrap().push("generate_test_error");
        DomainError::new(kind, format!("{} test error", self.name))
    }

    async fn list_webhook_examples(&self) -> Vec<WebhookExample> {
        self.calls.lock().unwrap().push("list_webhook_examples");
        vec![WebhookExample {
            event_type: "message.delivered".to_string(),
            description: "Delivery receipt".to_string(),
            payload: WebhookPayload::new("message.delivered", serde_json::json!({ "messageId": "msg_1" })),
        }]
    }
}
