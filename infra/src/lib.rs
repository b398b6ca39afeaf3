//! # Infrastructure Layer
//!
//! Concrete SMS marketing providers behind the `lk_core` service contract:
//!
//! - **Mock**: seeded in-memory provider with sandbox operations
//! - **HTTP**: REST client for the live provider
//!
//! plus the factory that wires both into a `ServiceSwitch`.

// Re-export core types for convenience
pub use lk_core::errors::*;

/// SMS service module - mock and live providers
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
