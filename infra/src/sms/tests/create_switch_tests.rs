//! Unit tests for SMS switch creation

use lk_core::services::sms::{ServiceMode, SmsMarketingService};
use lk_shared::{Environment, SmsConfig};

use crate::sms::create_sms_switch;
use crate::InfrastructureError;

#[test]
fn test_development_starts_in_mock_mode() {
    let config = SmsConfig::for_environment(Environment::Development);
    let switch = create_sms_switch(&config).unwrap();
    assert_eq!(switch.mode(), ServiceMode::Mock);
    assert_eq!(switch.provider_name(), "mock");
}

#[test]
fn test_production_starts_in_real_mode() {
    let config = SmsConfig::for_environment(Environment::Production);
    let switch = create_sms_switch(&config).unwrap();
    assert_eq!(switch.mode(), ServiceMode::Real);
    assert_eq!(switch.provider_name(), "http");
    assert!(!switch.real_service().is_configured());
}

#[test]
fn test_test_context_forces_mock_mode() {
    let mut config = SmsConfig::for_environment(Environment::Test);
    config.use_mocks = false;
    let switch = create_sms_switch(&config).unwrap();
    assert!(switch.currently_mocking());
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = SmsConfig::for_environment(Environment::Development);
    config.request_timeout_secs = 0;
    match create_sms_switch(&config) {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("SMS_REQUEST_TIMEOUT_SECS")),
        _ => panic!("Expected configuration error"),
    }
}

#[tokio::test]
async fn test_unconfigured_real_mode_reports_not_configured() {
    let config = SmsConfig::for_environment(Environment::Production);
    let switch = create_sms_switch(&config).unwrap();

    let error = switch.get_lists().await.unwrap_err();
    assert_eq!(error.status, 503);
    assert!(error.message.contains("not configured"));

    switch.force_mock();
    let lists = switch.get_lists().await.unwrap();
    assert_eq!(lists.len(), 3);
}
