//! Runtime selection between the mock and the real SMS provider

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::mode::{ServiceMode, SwitchConfig};
use super::traits::{SandboxOperations, SmsMarketingService};
use crate::domain::entities::{
    AccountBalance, AutoReply, CampaignStats, Contact, Message, NewAutoReply, NewContact,
    SmsList, WebhookExample, WebhookOutcome, WebhookPayload,
};
use crate::errors::{DomainError, DomainResult, ErrorKind, SwitchError};

/// Routes every operation to the mock or the real implementation
///
/// The mode is read once per call, so a call never mixes implementations even
/// if `force_mock`/`force_real` run concurrently. Results and errors are passed
/// through unchanged.
pub struct ServiceSwitch<M, R> {
    mock: Arc<M>,
    real: Arc<R>,
    mocking: AtomicBool,
}

impl<M, R> ServiceSwitch<M, R>
where
    M: SmsMarketingService + SandboxOperations,
    R: SmsMarketingService,
{
    pub fn new(mock: Arc<M>, real: Arc<R>, config: SwitchConfig) -> Self {
        let mode = config.initial_mode();
        info!(
            mode = %mode,
            use_mocks = config.use_mocks,
            test_context = config.test_context,
            "SMS service switch initialised"
        );
        Self {
            mock,
            real,
            mocking: AtomicBool::new(mode.is_mock()),
        }
    }

    pub fn mode(&self) -> ServiceMode {
        if self.currently_mocking() {
            ServiceMode::Mock
        } else {
            ServiceMode::Real
        }
    }

    pub fn currently_mocking(&self) -> bool {
        self.mocking.load(Ordering::SeqCst)
    }

    /// Route subsequent calls to the mock provider
    pub fn force_mock(&self) {
        if !self.mocking.swap(true, Ordering::SeqCst) {
            info!(from = %ServiceMode::Real, to = %ServiceMode::Mock, "SMS service mode changed");
        }
    }

    /// Route subsequent calls to the real provider
    pub fn force_real(&self) {
        if self.mocking.swap(false, Ordering::SeqCst) {
            info!(from = %ServiceMode::Mock, to = %ServiceMode::Real, "SMS service mode changed");
        }
    }

    pub fn set_mode(&self, mode: ServiceMode) {
        match mode {
            ServiceMode::Mock => self.force_mock(),
            ServiceMode::Real => self.force_real(),
        }
    }

    pub fn mock_service(&self) -> &Arc<M> {
        &self.mock
    }

    pub fn real_service(&self) -> &Arc<R> {
        &self.real
    }

    fn active(&self, operation: &'static str) -> &dyn SmsMarketingService {
        let mode = self.mode();
        debug!(operation, mode = %mode, "Dispatching SMS operation");
        match mode {
            ServiceMode::Mock => self.mock.as_ref(),
            ServiceMode::Real => self.real.as_ref(),
        }
    }

    fn sandbox(&self, operation: &'static str) -> Result<&M, SwitchError> {
        let mode = self.mode();
        if mode.is_mock() {
            Ok(self.mock.as_ref())
        } else {
            warn!(operation, mode = %mode, "Sandbox operation refused outside mock mode");
            Err(SwitchError::ModeRestricted { operation, mode })
        }
    }

    /// Sample error of the requested kind; mock mode only
    pub async fn generate_test_error(&self, kind: ErrorKind) -> Result<DomainError, SwitchError> {
        let sandbox = self.sandbox("generate_test_error")?;
        Ok(sandbox.generate_test_error(kind).await)
    }

    /// Sample webhook payloads; mock mode only
    pub async fn list_webhook_examples(&self) -> Result<Vec<WebhookExample>, SwitchError> {
        let sandbox = self.sandbox("list_webhook_examples")?;
        Ok(sandbox.list_webhook_examples().await)
    }
}

#[async_trait]
impl<M, R> SmsMarketingService for ServiceSwitch<M, R>
where
    M: SmsMarketingService + SandboxOperations,
    R: SmsMarketingService,
{
    async fn send_message(
        &self,
        list_id: &str,
        content: &str,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Message> {
        self.active("send_message")
            .send_message(list_id, content, scheduled_at)
            .await
    }

    async fn get_message_history(
        &self,
        list_id: Option<&str>,
        limit: usize,
    ) -> DomainResult<Vec<Message>> {
        self.active("get_message_history")
            .get_message_history(list_id, limit)
            .await
    }

    async fn subscribe_contact(&self, list_id: &str, contact: NewContact) -> DomainResult<Contact> {
        self.active("subscribe_contact")
            .subscribe_contact(list_id, contact)
            .await
    }

    async fn get_contacts(&self, list_id: &str) -> DomainResult<Vec<Contact>> {
        self.active("get_contacts").get_contacts(list_id).await
    }

    async fn get_campaign_stats(&self, campaign_id: &str) -> DomainResult<CampaignStats> {
        self.active("get_campaign_stats")
            .get_campaign_stats(campaign_id)
            .await
    }

    async fn get_lists(&self) -> DomainResult<Vec<SmsList>> {
        self.active("get_lists").get_lists().await
    }

    async fn delete_subscriber(&self, list_id: &str, subscriber_id: &str) -> DomainResult<()> {
        self.active("delete_subscriber")
            .delete_subscriber(list_id, subscriber_id)
            .await
    }

    async fn get_auto_replies(&self) -> DomainResult<Vec<AutoReply>> {
        self.active("get_auto_replies").get_auto_replies().await
    }

    async fn create_auto_reply(&self, auto_reply: NewAutoReply) -> DomainResult<AutoReply> {
        self.active("create_auto_reply")
            .create_auto_reply(auto_reply)
            .await
    }

    async fn verify_webhook(&self, payload: &[u8], signature: &str) -> DomainResult<bool> {
        self.active("verify_webhook")
            .verify_webhook(payload, signature)
            .await
    }

    async fn process_webhook(&self, payload: WebhookPayload) -> DomainResult<WebhookOutcome> {
        self.active("process_webhook").process_webhook(payload).await
    }

    async fn get_account_balance(&self) -> DomainResult<AccountBalance> {
        self.active("get_account_balance")
            .get_account_balance()
            .await
    }

    fn provider_name(&self) -> &str {
        if self.currently_mocking() {
            self.mock.provider_name()
        } else {
            self.real.provider_name()
        }
    }
}
