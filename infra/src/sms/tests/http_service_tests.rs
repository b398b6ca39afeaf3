//! Unit tests for the HTTP SMS marketing provider against a local stub

use std::collections::HashMap;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use serde_json::{json, Value};

use lk_core::domain::entities::{NewAutoReply, NewContact, WebhookPayload};
use lk_core::errors::ErrorKind;
use lk_core::services::sms::{sign_payload, SmsMarketingService};
use lk_shared::{Environment, SmsConfig};

use crate::sms::{HttpSmsMarketingService, MockSmsMarketingService};

const PUBLIC_KEY: &str = "pk_test";
const PRIVATE_KEY: &str = "sk_test";
const WEBHOOK_SECRET: &str = "whsec_live_test";

fn authorized(req: &HttpRequest) -> bool {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", PUBLIC_KEY, PRIVATE_KEY))
    );
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "message": "Invalid API key" }))
}

fn message_json(id: &str, list_id: &str, content: &str, segments: u64, encoding: &str) -> Value {
    json!({
        "id": id,
        "listId": list_id,
        "content": content,
        "status": "queued",
        "recipients": 2,
        "segments": segments,
        "encoding": encoding,
        "estimatedCost": 0.015,
        "createdAt": Utc::now(),
    })
}

async fn post_message(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({
        "data": message_json(
            "msg_live_1",
            body["listId"].as_str().unwrap_or_default(),
            body["content"].as_str().unwrap_or_default(),
            body["segments"].as_u64().unwrap_or_default(),
            body["encoding"].as_str().unwrap_or_default(),
        )
    }))
}

async fn get_messages(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let list_id = query.get("listId").cloned().unwrap_or_else(|| "all".to_string());
    let limit = query.get("limit").cloned().unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "data": [message_json(&format!("limit_{}", limit), &list_id, "hello", 1, "gsm7")]
    }))
}

async fn get_lists(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "data": [{
            "id": "list_live",
            "name": "Live list",
            "subscriberCount": 42,
            "createdAt": Utc::now(),
        }]
    }))
}

async fn get_contacts(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    if path.as_str() == "list_404" {
        return HttpResponse::NotFound().json(json!({ "message": "List not found" }));
    }
    HttpResponse::Ok().json(json!({ "data": [] }))
}

async fn post_contact(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({
        "data": {
            "id": "contact_live_1",
            "listId": path.into_inner(),
            "phone": body["phone"],
            "status": "subscribed",
            "subscribedAt": Utc::now(),
        }
    }))
}

async fn delete_contact(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::NoContent().finish()
}

async fn campaign_stats(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    match path.as_str() {
        "camp_limited" => HttpResponse::TooManyRequests()
            .insert_header(("Retry-After", "17"))
            .json(json!({ "error": "Too many requests" })),
        "camp_down" => HttpResponse::ServiceUnavailable().json(json!({ "error": "maintenance" })),
        "camp_slow" => {
            actix_web::rt::time::sleep(Duration::from_secs(3)).await;
            HttpResponse::Ok().json(json!({ "data": {} }))
        }
        "camp_garbled" => HttpResponse::Ok().body("not json"),
        "camp_locked" => {
            HttpResponse::Conflict().json(json!({ "message": "Campaign is already sending" }))
        }
        "camp_bad" => HttpResponse::UnprocessableEntity()
            .json(json!({ "message": "Campaign id is malformed" })),
        id => HttpResponse::Ok().json(json!({
            "data": {
                "campaignId": id,
                "name": "Live campaign",
                "sent": 100,
                "delivered": 90,
                "failed": 10,
                "clicks": 9,
                "optOuts": 1,
                "deliveryRate": 90.0,
                "clickRate": 10.0,
                "cost": 0.75,
            }
        })),
    }
}

async fn get_auto_replies(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "data": [{
            "id": "reply_live",
            "keyword": "HELP",
            "response": "Reply STOP to unsubscribe.",
            "active": true,
            "createdAt": Utc::now(),
        }]
    }))
}

async fn post_auto_reply(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({
        "data": {
            "id": "reply_live_2",
            "keyword": body["keyword"],
            "response": body["response"],
            "active": true,
            "createdAt": Utc::now(),
        }
    }))
}

async fn balance(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({
        "data": { "balance": 42.0, "currency": "USD", "estimatedMessagesRemaining": 5600 }
    }))
}

/// Start a stub provider on an ephemeral port and return its base URL
fn spawn_provider() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/messages", web::post().to(post_message))
            .route("/messages", web::get().to(get_messages))
            .route("/lists", web::get().to(get_lists))
            .route("/lists/{id}/contacts", web::get().to(get_contacts))
            .route("/lists/{id}/contacts", web::post().to(post_contact))
            .route("/lists/{id}/contacts/{sid}", web::delete().to(delete_contact))
            .route("/campaigns/{id}/stats", web::get().to(campaign_stats))
            .route("/auto-replies", web::get().to(get_auto_replies))
            .route("/auto-replies", web::post().to(post_auto_reply))
            .route("/account/balance", web::get().to(balance))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let port = server.addrs()[0].port();
    actix_web::rt::spawn(server.run());
    format!("http://127.0.0.1:{}", port)
}

fn config_for(base_url: &str) -> SmsConfig {
    let mut config = SmsConfig::for_environment(Environment::Production);
    config.base_url = Some(base_url.to_string());
    config.public_key = Some(PUBLIC_KEY.to_string());
    config.private_key = Some(PRIVATE_KEY.to_string());
    config.webhook_secret = Some(WEBHOOK_SECRET.to_string());
    config.request_timeout_secs = 1;
    config
}

fn service_for(base_url: &str) -> HttpSmsMarketingService {
    HttpSmsMarketingService::new(&config_for(base_url)).unwrap()
}

#[actix_web::test]
async fn test_send_message_attaches_segmentation() {
    let service = service_for(&spawn_provider());
    let message = service
        .send_message("list_live", &"é".repeat(80), None)
        .await
        .unwrap();
    assert_eq!(message.id, "msg_live_1");
    assert_eq!(message.list_id, "list_live");
    assert_eq!(message.segments, 2);
    assert_eq!(message.encoding.to_string(), "ucs2");
}

#[actix_web::test]
async fn test_history_query_parameters() {
    let service = service_for(&spawn_provider());

    let history = service.get_message_history(Some("list_7"), 500).await.unwrap();
    assert_eq!(history[0].id, "limit_100");
    assert_eq!(history[0].list_id, "list_7");

    let history = service.get_message_history(None, 20).await.unwrap();
    assert_eq!(history[0].id, "limit_20");
    assert_eq!(history[0].list_id, "all");
}

#[actix_web::test]
async fn test_lists_contacts_and_balance() {
    let service = service_for(&spawn_provider());

    let lists = service.get_lists().await.unwrap();
    assert_eq!(lists[0].subscriber_count, 42);

    let contact = service
        .subscribe_contact("list_live", NewContact::with_phone(" +14155552671 "))
        .await
        .unwrap();
    assert_eq!(contact.phone, "+14155552671");
    assert_eq!(contact.list_id, "list_live");

    assert!(service.get_contacts("list_live").await.unwrap().is_empty());
    service.delete_subscriber("list_live", "contact_live_1").await.unwrap();

    let balance = service.get_account_balance().await.unwrap();
    assert_eq!(balance.estimated_messages_remaining, 5600);
}

#[actix_web::test]
async fn test_create_auto_reply_sends_normalised_keyword() {
    let service = service_for(&spawn_provider());
    let reply = service
        .create_auto_reply(NewAutoReply {
            keyword: "stop".to_string(),
            response: "You are unsubscribed.".to_string(),
            list_id: None,
        })
        .await
        .unwrap();
    assert_eq!(reply.keyword, "STOP");
}

#[actix_web::test]
async fn test_rate_limit_maps_retry_after() {
    let service = service_for(&spawn_provider());
    let error = service.get_campaign_stats("camp_limited").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::RateLimit);
    assert_eq!(error.status, 429);
    assert_eq!(error.retry_after_secs, Some(17));
}

#[actix_web::test]
async fn test_server_error_maps_to_external_api() {
    let service = service_for(&spawn_provider());
    let error = service.get_campaign_stats("camp_down").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::ExternalApi);
    assert_eq!(error.status, 502);
    assert!(error.message.contains("maintenance"));
    assert_eq!(error.details, Some(json!({ "providerStatus": 503 })));
}

#[actix_web::test]
async fn test_missing_resource_maps_to_not_found() {
    let service = service_for(&spawn_provider());
    let error = service.get_contacts("list_404").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::NotFound);
    assert_eq!(error.status, 404);
    assert_eq!(error.message, "List not found");
    assert_eq!(error.details, Some(json!({ "providerStatus": 404 })));

    let mock = MockSmsMarketingService::with_delay(Duration::ZERO);
    let mock_error = mock.get_contacts("list_404").await.unwrap_err();
    assert_eq!(mock_error.kind, error.kind);
    assert_eq!(mock_error.status, error.status);
    assert_eq!(mock_error.code(), error.code());
}

#[actix_web::test]
async fn test_client_errors_keep_their_kind() {
    let service = service_for(&spawn_provider());

    let error = service.get_campaign_stats("camp_locked").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Conflict);
    assert_eq!(error.status, 409);
    assert_eq!(error.message, "Campaign is already sending");
    assert_eq!(error.details, Some(json!({ "providerStatus": 409 })));

    let error = service.get_campaign_stats("camp_bad").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Validation);
    assert_eq!(error.status, 400);
    assert_eq!(error.details, Some(json!({ "providerStatus": 422 })));
}

#[actix_web::test]
async fn test_invalid_response_body() {
    let service = service_for(&spawn_provider());
    let error = service.get_campaign_stats("camp_garbled").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::ExternalApi);
    assert!(error.message.contains("Invalid response"));
}

#[actix_web::test]
async fn test_bad_credentials_map_to_auth() {
    let base_url = spawn_provider();
    let mut config = config_for(&base_url);
    config.private_key = Some("sk_wrong".to_string());
    let service = HttpSmsMarketingService::new(&config).unwrap();

    let error = service.get_lists().await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Auth);
    assert_eq!(error.message, "Invalid API key");
    assert_eq!(error.status, 401);
}

#[actix_web::test]
async fn test_timeout_maps_to_gateway_timeout() {
    let service = service_for(&spawn_provider());
    let error = service.get_campaign_stats("camp_slow").await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::ExternalApi);
    assert_eq!(error.status, 504);
}

#[actix_web::test]
async fn test_missing_configuration_fails_without_request() {
    let service =
        HttpSmsMarketingService::new(&SmsConfig::for_environment(Environment::Production))
            .unwrap();
    assert!(!service.is_configured());

    let error = service.send_message("list_001", "Hi", None).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Internal);
    assert_eq!(error.status, 503);
    assert!(error.message.contains("SMS_API_BASE_URL"));

    let error = service.verify_webhook(b"{}", "sig").await.unwrap_err();
    assert!(error.message.contains("SMS_WEBHOOK_SECRET"));
}

#[actix_web::test]
async fn test_validation_runs_before_request() {
    let service =
        HttpSmsMarketingService::new(&SmsConfig::for_environment(Environment::Production))
            .unwrap();
    let error = service.send_message("list_001", "", None).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Validation);

    let error = service.get_message_history(Some(""), 10).await.unwrap_err();
    assert_eq!(error.kind, ErrorKind::Validation);
}

#[actix_web::test]
async fn test_webhook_verification_and_auto_reply() {
    let service = service_for(&spawn_provider());
    let body = br#"{"type":"message.received","data":{"from":"+14155552671","text":"help"}}"#;

    let signature = sign_payload(WEBHOOK_SECRET, body);
    assert!(service.verify_webhook(body, &signature).await.unwrap());
    assert!(!service.verify_webhook(body, "sha256=00").await.unwrap());

    let payload: WebhookPayload = serde_json::from_slice(body).unwrap();
    let outcome = service.process_webhook(payload).await.unwrap();
    assert_eq!(outcome.auto_reply.as_deref(), Some("Reply STOP to unsubscribe."));

    let outcome = service
        .process_webhook(WebhookPayload::new(
            "message.delivered",
            json!({ "messageId": "msg_live_1" }),
        ))
        .await
        .unwrap();
    assert_eq!(outcome.action, "acknowledged");
}
