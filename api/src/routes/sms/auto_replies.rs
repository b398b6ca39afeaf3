use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use lk_core::domain::entities::NewAutoReply;
use lk_core::services::sms::{SandboxOperations, SmsMarketingService};

use crate::dto::CreateAutoReplyRequest;
use crate::handlers::response::{created, ok};
use crate::handlers::{domain_error_response, validation_error_response, RequestIdExt};
use crate::state::AppState;

/// GET /api/v1/sms/auto-replies
pub async fn get_auto_replies<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.get_auto_replies().await {
        Ok(replies) => ok("Auto-replies retrieved", replies, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}

/// POST /api/v1/sms/auto-replies
pub async fn create_auto_reply<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    body: web::Json<CreateAutoReplyRequest>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &request_id);
    }

    match state.sms.create_auto_reply(NewAutoReply::from(body)).await {
        Ok(reply) => {
            tracing::info!(request_id = %request_id, keyword = %reply.keyword, "Auto-reply created");
            created("Auto-reply created", reply, &request_id)
        }
        Err(error) => domain_error_response(&error, &request_id),
    }
}
