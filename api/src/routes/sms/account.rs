use actix_web::{web, HttpRequest, HttpResponse};

use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::handlers::response::ok;
use crate::handlers::{domain_error_response, RequestIdExt};
use crate::state::AppState;

/// GET /api/v1/sms/account/balance
pub async fn account_balance<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.get_account_balance().await {
        Ok(balance) => ok("Account balance retrieved", balance, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}
