//! SMS provider configuration

use serde::{Deserialize, Serialize};

use super::{parse_flag, Environment};

/// SMS marketing provider configuration
///
/// Credentials are optional: the mock provider never needs them, and the real
/// provider reports itself as not configured when they are missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Start the service switch in mock mode
    pub use_mocks: bool,

    /// Running under a test harness (also forces mock mode)
    #[serde(default)]
    pub test_context: bool,

    /// Provider REST base URL
    #[serde(default)]
    pub base_url: Option<String>,

    /// Provider public key (Basic auth user)
    #[serde(default)]
    pub public_key: Option<String>,

    /// Provider private key (Basic auth password)
    #[serde(default, skip_serializing)]
    pub private_key: Option<String>,

    /// Shared secret used to sign inbound webhooks
    #[serde(default, skip_serializing)]
    pub webhook_secret: Option<String>,

    /// Timeout applied to every provider request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Artificial latency added by the mock provider, in milliseconds
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

impl SmsConfig {
    /// Defaults for an environment: mocks everywhere except production
    pub fn for_environment(env: Environment) -> Self {
        Self {
            use_mocks: !env.is_production(),
            test_context: env.is_test(),
            base_url: None,
            public_key: None,
            private_key: None,
            webhook_secret: None,
            request_timeout_secs: default_request_timeout_secs(),
            mock_delay_ms: if env.is_test() { 0 } else { default_mock_delay_ms() },
        }
    }

    /// Read the `SMS_*` variables on top of the environment defaults
    pub fn from_lookup<F>(env: Environment, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::for_environment(env);
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            use_mocks: lookup("SMS_USE_MOCKS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.use_mocks),
            test_context: defaults.test_context,
            base_url: non_empty("SMS_API_BASE_URL"),
            public_key: non_empty("SMS_PUBLIC_KEY"),
            private_key: non_empty("SMS_PRIVATE_KEY"),
            webhook_secret: non_empty("SMS_WEBHOOK_SECRET"),
            request_timeout_secs: lookup("SMS_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            mock_delay_ms: lookup("SMS_MOCK_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mock_delay_ms),
        }
    }

    /// Whether the real provider has everything it needs to make requests
    pub fn has_credentials(&self) -> bool {
        self.base_url.is_some() && self.public_key.is_some() && self.private_key.is_some()
    }
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_mock_delay_ms() -> u64 {
    100
}
