//! Error envelopes
//!
//! Every failure is reported as `{success: false, message, error: CODE,
//! data?: details}` with the request id echoed.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::header::{HeaderValue, RETRY_AFTER};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::{json, Value};
use validator::ValidationErrors;

use lk_core::errors::{DomainError, SwitchError};
use lk_shared::error_codes;
use lk_shared::ApiResponse;

use super::request_id::{RequestIdExt, REQUEST_ID_HEADER};

/// Build an error envelope
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Value>,
    request_id: &str,
) -> HttpResponse {
    let mut body = ApiResponse::<Value>::error(message, code).with_request_id(request_id);
    body.data = details;

    if status.is_server_error() {
        tracing::error!(request_id, code, status = status.as_u16(), "{}", message);
    } else {
        tracing::warn!(request_id, code, status = status.as_u16(), "{}", message);
    }

    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(body)
}

/// Domain errors use their status hint and kind code
pub fn domain_error_response(error: &DomainError, request_id: &str) -> HttpResponse {
    let status = StatusCode::from_u16(error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = error_response(
        status,
        error.code(),
        &error.message,
        error.details.clone(),
        request_id,
    );
    if let Some(secs) = error.retry_after_secs {
        response
            .headers_mut()
            .insert(RETRY_AFTER, HeaderValue::from(secs));
    }
    response
}

/// Mode restrictions are a conflict with the current switch state
pub fn switch_error_response(error: &SwitchError, request_id: &str) -> HttpResponse {
    let details = match error {
        SwitchError::ModeRestricted { operation, mode } => {
            json!({ "operation": operation, "mode": mode })
        }
    };
    error_response(
        StatusCode::CONFLICT,
        error_codes::MODE_RESTRICTED,
        &error.to_string(),
        Some(details),
        request_id,
    )
}

/// Field errors from `validator`, as `{field: [messages]}`
pub fn validation_error_response(errors: &ValidationErrors, request_id: &str) -> HttpResponse {
    let fields: serde_json::Map<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages: Vec<Value> = errors
                .iter()
                .map(|e| {
                    Value::String(
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string()),
                    )
                })
                .collect();
            (field.to_string(), Value::Array(messages))
        })
        .collect();

    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        Some(json!({ "fields": fields })),
        request_id,
    )
}

/// Malformed JSON bodies get the same envelope as validation failures
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let request_id = req.request_id();
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        &format!("Invalid JSON body: {}", err),
        None,
        &request_id,
    );
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let request_id = req.request_id();
    let response = error_response(
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        &format!("Invalid query string: {}", err),
        None,
        &request_id,
    );
    InternalError::from_response(err, response).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
        None,
        &req.request_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_domain_error_envelope() {
        let error = DomainError::not_found("SMS list", "list_999");
        let response = domain_error_response(&error, "req-1");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "SMS list 'list_999' not found");
        assert_eq!(body["requestId"], "req-1");
        assert_eq!(body["data"]["id"], "list_999");
    }

    #[actix_web::test]
    async fn test_rate_limit_sets_retry_after() {
        let response = domain_error_response(&DomainError::rate_limited(Some(42)), "req-2");
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(RETRY_AFTER).unwrap(), "42");
    }

    #[actix_web::test]
    async fn test_switch_error_is_conflict() {
        let error = SwitchError::ModeRestricted {
            operation: "generate_test_error",
            mode: lk_core::services::sms::ServiceMode::Real,
        };
        let response = switch_error_response(&error, "req-3");
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "MODE_RESTRICTED");
        assert_eq!(body["data"]["mode"], "real");
    }
}
