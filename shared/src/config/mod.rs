//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind configuration
//! - `sms` - SMS provider credentials and mock/real mode flags
//!
//! Every config type can be built from the process environment (`from_env`)
//! or from an arbitrary key-value lookup (`from_lookup`), which keeps tests
//! independent of global environment variables.

pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            logging: LoggingConfig::for_environment(env),
            sms: SmsConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a key-value lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_lookup(&lookup),
            logging,
            sms: SmsConfig::from_lookup(environment, &lookup),
        }
    }
}

/// Parse a boolean flag the way `.env` files usually spell them
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
