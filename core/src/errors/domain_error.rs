//! Tagged error type returned by every SMS operation
//!
//! A `DomainError` is the structured failure outcome of a business call: it
//! carries a kind, a human-readable message, the HTTP status the route layer
//! should answer with, and optional structured details. Backing services never
//! panic or raise for business failures; they return one of these.

use lk_shared::error_codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure classes shared by the mock and the real provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Auth,
    NotFound,
    Conflict,
    ExternalApi,
    RateLimit,
    Internal,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Validation,
        ErrorKind::Auth,
        ErrorKind::NotFound,
        ErrorKind::Conflict,
        ErrorKind::ExternalApi,
        ErrorKind::RateLimit,
        ErrorKind::Internal,
    ];

    /// HTTP status used when the error does not carry a more specific one
    pub fn default_status(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Auth => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::ExternalApi => 502,
            ErrorKind::RateLimit => 429,
            ErrorKind::Internal => 500,
        }
    }

    /// Stable error code for clients and logs
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => error_codes::VALIDATION_ERROR,
            ErrorKind::Auth => error_codes::UNAUTHORIZED,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Conflict => error_codes::CONFLICT,
            ErrorKind::ExternalApi => error_codes::EXTERNAL_API_ERROR,
            ErrorKind::RateLimit => error_codes::RATE_LIMIT_EXCEEDED,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Auth => "auth",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::ExternalApi => "external_api",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "validation" => Ok(ErrorKind::Validation),
            "auth" | "authentication" => Ok(ErrorKind::Auth),
            "not_found" | "notfound" => Ok(ErrorKind::NotFound),
            "conflict" => Ok(ErrorKind::Conflict),
            "external_api" | "externalapi" | "external" => Ok(ErrorKind::ExternalApi),
            "rate_limit" | "ratelimit" => Ok(ErrorKind::RateLimit),
            "internal" => Ok(ErrorKind::Internal),
            _ => Err(format!("Unknown error kind: {}", s)),
        }
    }
}

/// Structured failure of an SMS operation
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct DomainError {
    /// Failure class
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
    /// HTTP status hint for the route layer
    pub status: u16,
    /// Optional structured payload (field errors, provider status, ...)
    pub details: Option<serde_json::Value>,
    /// Seconds the provider asked us to wait (rate limits only)
    pub retry_after_secs: Option<u64>,
}

impl DomainError {
    /// Create an error with the kind's default status
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.default_status(),
            details: None,
            retry_after_secs: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// A required argument was blank
    pub fn required(field: &str) -> Self {
        Self::validation(format!("{} is required", field))
            .with_details(serde_json::json!({ "field": field }))
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Auth, message)
    }

    /// Unknown identifier, e.g. `SMS list 'list_999' not found`
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new(ErrorKind::NotFound, format!("{} '{}' not found", resource, id))
            .with_details(serde_json::json!({ "resource": resource, "id": id }))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn external_api(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExternalApi, message)
    }

    /// Provider answered with a non-success status
    pub fn provider_status(provider_status: u16, message: impl Into<String>) -> Self {
        Self::external_api(message)
            .with_details(serde_json::json!({ "providerStatus": provider_status }))
    }

    /// Provider did not answer within the configured timeout
    pub fn timeout(operation: &str) -> Self {
        Self::external_api(format!("SMS provider timed out during {}", operation))
            .with_status(504)
    }

    /// Provider rate limit hit; `retry_after_secs` comes from `Retry-After`
    pub fn rate_limited(retry_after_secs: Option<u64>) -> Self {
        let message = match retry_after_secs {
            Some(secs) => format!("SMS provider rate limit exceeded, retry after {} seconds", secs),
            None => "SMS provider rate limit exceeded".to_string(),
        };
        let mut error = Self::new(ErrorKind::RateLimit, message);
        error.retry_after_secs = retry_after_secs;
        error
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The real provider was called without credentials or base URL
    pub fn not_configured(what: &str) -> Self {
        Self::internal(format!("SMS provider is not configured: missing {}", what))
            .with_status(503)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Error code derived from the kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}
