//! Envelope builders for successful responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use lk_shared::ApiResponse;

use super::request_id::REQUEST_ID_HEADER;

/// Serialise an envelope, stamping and echoing the request id
pub fn respond<T: Serialize>(status: StatusCode, body: ApiResponse<T>, request_id: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(body.with_request_id(request_id))
}

pub fn ok<T: Serialize>(message: &str, data: T, request_id: &str) -> HttpResponse {
    respond(StatusCode::OK, ApiResponse::success(message, data), request_id)
}

pub fn created<T: Serialize>(message: &str, data: T, request_id: &str) -> HttpResponse {
    respond(StatusCode::CREATED, ApiResponse::success(message, data), request_id)
}

/// Success without payload
pub fn ok_empty(message: &str, request_id: &str) -> HttpResponse {
    respond(StatusCode::OK, ApiResponse::<()>::ok(message), request_id)
}
