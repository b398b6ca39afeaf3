//! Request correlation ids

use actix_web::{HttpMessage, HttpRequest};
use uuid::Uuid;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

const MAX_REQUEST_ID_LENGTH: usize = 128;

/// Request id resolved once and cached in the request extensions
#[derive(Debug, Clone)]
struct RequestId(String);

/// Access to the caller's request id
pub trait RequestIdExt {
    /// The `X-Request-ID` header if usable, otherwise a fresh UUID v4.
    /// Stable for the lifetime of the request.
    fn request_id(&self) -> String;
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> String {
        if let Some(RequestId(id)) = self.extensions().get::<RequestId>() {
            return id.clone();
        }

        let id = self
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LENGTH)
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        self.extensions_mut().insert(RequestId(id.clone()));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_header_is_reused() {
        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "req-123"))
            .to_http_request();
        assert_eq!(req.request_id(), "req-123");
    }

    #[test]
    fn test_missing_or_oversized_header_generates_uuid() {
        let req = TestRequest::default().to_http_request();
        assert!(Uuid::parse_str(&req.request_id()).is_ok());

        let req = TestRequest::default()
            .insert_header((REQUEST_ID_HEADER, "x".repeat(200)))
            .to_http_request();
        assert!(Uuid::parse_str(&req.request_id()).is_ok());
    }

    #[test]
    fn test_generated_id_is_stable_per_request() {
        let req = TestRequest::default().to_http_request();
        let first = req.request_id();
        assert_eq!(req.request_id(), first);
        assert_ne!(TestRequest::default().to_http_request().request_id(), first);
    }
}
