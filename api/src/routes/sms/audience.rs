//! Lists and their contacts

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use lk_core::domain::entities::NewContact;
use lk_core::services::sms::{SandboxOperations, SmsMarketingService};
use lk_shared::phone::mask_phone_number;

use crate::dto::SubscribeContactRequest;
use crate::handlers::response::{created, ok, ok_empty};
use crate::handlers::{domain_error_response, validation_error_response, RequestIdExt};
use crate::state::AppState;

/// GET /api/v1/sms/lists
pub async fn get_lists<M, R>(req: HttpRequest, state: web::Data<AppState<M, R>>) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.get_lists().await {
        Ok(lists) => ok("Lists retrieved", lists, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}

/// GET /api/v1/sms/lists/{list_id}/contacts
pub async fn get_contacts<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    match state.sms.get_contacts(&path).await {
        Ok(contacts) => ok("Contacts retrieved", contacts, &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}

/// POST /api/v1/sms/lists/{list_id}/contacts
pub async fn subscribe_contact<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    path: web::Path<String>,
    body: web::Json<SubscribeContactRequest>,
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

    let list_id = path.into_inner();
    match state.sms.subscribe_contact(&list_id, NewContact::from(body)).await {
        Ok(contact) => {
            tracing::info!(
                request_id = %request_id,
                list_id = %list_id,
                phone = %mask_phone_number(&contact.phone),
                "Contact subscribed"
            );
            created("Contact subscribed", contact, &request_id)
        }
        Err(error) => domain_error_response(&error, &request_id),
    }
}

/// DELETE /api/v1/sms/lists/{list_id}/contacts/{subscriber_id}
pub async fn delete_subscriber<M, R>(
    req: HttpRequest,
    state: web::Data<AppState<M, R>>,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    M: SmsMarketingService + SandboxOperations + 'static,
    R: SmsMarketingService + 'static,
{
    let request_id = req.request_id();
    let (list_id, subscriber_id) = path.into_inner();
    match state.sms.delete_subscriber(&list_id, &subscriber_id).await {
        Ok(()) => ok_empty("Subscriber removed", &request_id),
        Err(error) => domain_error_response(&error, &request_id),
    }
}
