use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use lk_core::services::sms::{SandboxOperations, SmsMarketingService, DEFAULT_HISTORY_LIMIT};

use crate::dto::{MessageHistoryQuery, SendMessageRequest};
use crate::handlers::response::{created, ok};
use crate::handlers::{domain_error_response, validation_error_response, RequestIdExt};
use crate::state::AppState;

/// POST /api/v1/sms/messages
///
/// ```json
/// { "listId": "list_001", "content": "Spring sale starts today!", "scheduledAt": null }
/// ```
pub async fn send_message<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    body: web::Json<SendMessageRequest>,
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

    match state
        .sms
        .send_message(&body.list_id, &body.content, body.scheduled_at)
        .await
    {
        Ok(message) => {
            tracing::info!(
                request_id = %request_id,
                message_id = %message.id,
                list_id = %message.list_id,
                segments = message.segments,
                "SMS message submitted"
            );
            let summary = if message.scheduled_at.is_some() {
                "Message scheduled"
            } else {
                "Message queued"
            };
            created(summary, message, &request_id)
        }
        Err(error) => domain_error_response(&error, &request_id),
    }
}

/// GET /api/v1/sms/messages?listId=&limit=
pub async fn message_history<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    query: web::Query<MessageHistoryQuery>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

    match state
        .sms
        .get_message_history(query.list_id.as_deref(), limit)
        .await
    {
        Ok(messages) => ok("Message history retrieved", messages, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}
