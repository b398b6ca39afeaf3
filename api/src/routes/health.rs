use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::dto::HealthResponse;
use crate::handlers::response::ok;
use crate::handlers::RequestIdExt;
use crate::state::AppState;

/// GET /health
pub async fn health_check<M, R>(req: HttpRequest, state: web::Data<AppState<M, R>>) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let health = HealthResponse {
        status: "healthy",
        service: "launchkit-api",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.to_string(),
        sms_mode: state.sms.mode(),
        sms_provider: state.sms.provider_name().to_string(),
    };
    ok("Service is healthy", health, &req.request_id())
}
