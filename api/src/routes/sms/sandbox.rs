//! Mock-only endpoints; refused with 409 while the switch is in real mode

use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::dto::TestErrorRequest;
use crate::handlers::response::ok;
use crate::handlers::{domain_error_response, switch_error_response, RequestIdExt};
use crate::state::AppState;

/// GET /api/v1/sms/sandbox/webhook-examples
pub async fn webhook_examples<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.list_webhook_examples().await {
        Ok(examples) => ok("Webhook examples retrieved", examples, &request_id),
        Err(error) => switch_error_response(&error, &request_id),
    }
}

/// POST /api/v1/sms/sandbox/errors
///
/// Responds with the generated error exactly as a real failure of that kind
/// would be reported, so clients can exercise their error handling.
pub async fn generate_error<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    body: web::Json<TestErrorRequest>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.generate_test_error(body.kind).await {
        Ok(error) => domain_error_response(&error, &request_id),
        Err(error) => switch_error_response(&error, &request_id),
    }
}
