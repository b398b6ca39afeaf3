//! API response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
///
/// Serialises as `{success, message, data?, error?, timestamp, requestId?}`,
/// the shape the web client reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Short human-readable summary
    pub message: String,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error description (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,

    /// Request ID for tracing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Attach a payload to an error response (field errors, retry hints)
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Add request ID for tracing
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<()> {
    /// Success without a payload
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            timestamp: Utc::now(),
            request_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("Lists retrieved", vec!["list_001"])
            .with_request_id("req-1");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Lists retrieved");
        assert_eq!(json["data"][0], "list_001");
        assert_eq!(json["requestId"], "req-1");
        assert!(json.get("error").is_none());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response: ApiResponse<()> =
            ApiResponse::error("Failed to send message", "SMS list 'nope' not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "SMS list 'nope' not found");
        assert!(json.get("data").is_none());
        assert!(json.get("requestId").is_none());
    }

    #[test]
    fn test_ok_without_payload() {
        let response = ApiResponse::ok("Subscriber removed");
        assert!(response.is_success());
        assert!(response.into_data().is_none());
    }
}
