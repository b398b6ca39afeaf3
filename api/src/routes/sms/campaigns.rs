use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::handlers::response::ok;
use crate::handlers::{domain_error_response, RequestIdExt};
use crate::state::AppState;

/// GET /api/v1/sms/campaigns/{campaign_id}/stats
pub async fn campaign_stats<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.get_campaign_stats(&path).await {
        Ok(stats) => ok("Campaign stats retrieved", stats, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}
