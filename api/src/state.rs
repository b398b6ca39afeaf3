//! Shared application state

use std::sync::Arc;

use lk_core::services::sms::{SandboxOperations, ServiceSwitch, SmsMarketingService};
use lk_shared::Environment;

/// State shared by every worker
pub struct AppState<M, R>
where
    M: SmsMarketingService + SandboxOperations,
    R: SmsMarketingService,
{
    pub sms: Arc<ServiceSwitch<M, R>>,
    pub environment: Environment,
}

impl<M, R> AppState<M, R>
where
    M: SmsMarketingService + SandboxOperations,
    R: SmsMarketingService,
{
    pub fn new(sms: Arc<ServiceSwitch<M, R>>, environment: Environment) -> Self {
        Self { sms, environment }
    }
}
