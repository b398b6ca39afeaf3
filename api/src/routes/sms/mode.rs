use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};
use lk_shared::error_codes;

use crate::dto::{ModeResponse, SetModeRequest};
use crate::handlers::response::ok;
use crate::handlers::{error_response, RequestIdExt};
use crate::state::AppState;

fn current_mode<M, R>(state: &AppState<M, R>) -> ModeResponse
where
    M: SmsMarketingService + SandboxOperations,
    R: SmsMarketingService,
{
    let mode = state.sms.mode();
    ModeResponse {
        mode,
        mocking: mode.is_mock(),
        provider: state.sms.provider_name().to_string(),
    }
}

/// GET /api/v1/sms/mode
pub async fn get_mode<M, R>(req: HttpRequest, state: web::Data<AppState<M, R>>) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    ok("Current SMS service mode", current_mode(state.get_ref()), &req.request_id())
}

/// POST /api/v1/sms/mode
///
/// ```json
/// { "mode": "mock" }
/// ```
///
/// Refused in production.
pub async fn set_mode<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    body: web::Json<SetModeRequest>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    if state.environment.is_production() {
        return error_response(
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            "SMS service mode cannot be changed in production",
            None,
            &request_id,
        );
    }

    state.sms.set_mode(body.mode);
    tracing::info!(request_id = %request_id, mode = %body.mode, "SMS service mode set via API");
    ok("SMS service mode updated", current_mode(state.get_ref()), &request_id)
}
