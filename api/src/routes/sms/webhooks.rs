use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::domain::entities::WebhookPayload;
use lk_core::services::sms::{SandboxOperations, SmsMarketingService};
use lk_shared::error_codes;

use crate::handlers::response::ok;
use crate::handlers::{domain_error_response, error_response, RequestIdExt};
use crate::state::AppState;

/// Header carrying the hex HMAC-SHA256 of the raw body
pub const WEBHOOK_SIGNATURE_HEADER: &str = "X-Webhook-Signature";

/// POST /api/v1/sms/webhooks
///
/// The signature is checked against the raw bytes before the body is parsed.
pub async fn receive_webhook<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    body: web::Bytes,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();

    let signature = match req
        .headers()
        .get(WEBHOOK_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some(signature) if !signature.trim().is_empty() => signature,
        _ => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::WEBHOOK_SIGNATURE_INVALID,
                "Missing webhook signature",
                None,
                &request_id,
            )
        }
    };

    match state.sms.verify_webhook(&body, signature).await {
        Ok(true) => {}
        Ok(false) => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::WEBHOOK_SIGNATURE_INVALID,
                "Invalid webhook signature",
                None,
                &request_id,
            )
        }
        Err(error) => return domain_error_response(&error, &request_id),
    }

    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                error_codes::VALIDATION_ERROR,
                &format!("Invalid webhook payload: {}", e),
                None,
                &request_id,
            )
        }
    };

    match state.sms.process_webhook(payload).await {
        Ok(outcome) => {
            tracing::info!(
                request_id = %request_id,
                event_type = %outcome.event_type,
                handled = outcome.handled,
                action = %outcome.action,
                "Webhook processed"
            );
            ok("Webhook processed", outcome, &request_id)
        }
        Err(error) => domain_error_response(&error, &request_id),
    }
}
