//! Shared utilities and common types for the Launchkit server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes and the JSON response envelope
//! - Utility functions (phone validation and masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LoggingConfig, ServerConfig, SmsConfig};
pub use errors::error_codes;
pub use types::ApiResponse;
pub use utils::phone;
