//! SMS Marketing Service Module
//!
//! Concrete providers behind [`SmsMarketingService`]:
//!
//! - **Mock**: seeded in-memory data, artificial latency, sandbox operations
//! - **HTTP**: the live provider's REST API with Basic credentials
//!
//! Both are always constructed so the switch can flip between them at runtime.
//!
//! [`SmsMarketingService`]: lk_core::services::sms::SmsMarketingService

use std::sync::Arc;

use tracing::{info, warn};

use lk_core::services::sms::{ServiceSwitch, SwitchConfig};
use lk_shared::SmsConfig;

use crate::InfrastructureError;

pub mod http;
pub mod mock;

pub use http::HttpSmsMarketingService;
pub use mock::{MockSmsMarketingService, MOCK_WEBHOOK_SECRET};

#[cfg(test)]
mod tests;

/// The switch as wired by the application
pub type SmsSwitch = ServiceSwitch<MockSmsMarketingService, HttpSmsMarketingService>;

/// Build both providers and a switch whose initial mode follows the config
pub fn create_sms_switch(config: &SmsConfig) -> Result<SmsSwitch, InfrastructureError> {
    if config.request_timeout_secs == 0 {
        return Err(InfrastructureError::Config(
            "SMS_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    let switch_config = SwitchConfig::from(config);
    if !switch_config.initial_mode().is_mock() && !config.has_credentials() {
        warn!("SMS switch starts in real mode without provider credentials");
    }

    let mock = Arc::new(MockSmsMarketingService::from_config(config));
    let real = Arc::new(HttpSmsMarketingService::new(config)?);

    info!(
        real_configured = real.is_configured(),
        "SMS providers created"
    );
    Ok(ServiceSwitch::new(mock, real, switch_config))
}
