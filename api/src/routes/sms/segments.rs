use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use lk_core::services::segmentation::segment;

use crate::dto::{SegmentPreview, SegmentRequest};
use crate::handlers::response::ok;
use crate::handlers::{validation_error_response, RequestIdExt};

/// POST /api/v1/sms/segments
///
/// Preview how a message splits into segments and what it costs, without
/// sending anything. Works in either mode.
pub async fn preview_segments(req: HttpRequest, body: web::Json<SegmentRequest>) -> HttpResponse {
    let request_id = req.request_id();
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &request_id);
    }

    let preview = SegmentPreview::new(segment(&body.message), body.recipients.unwrap_or(1));
    tracing::debug!(
        request_id = %request_id,
        segments = preview.segment_count,
        encoding = %preview.segmentation.encoding,
        "Segment preview computed"
    );
    ok("Message segmented", preview, &request_id)
}
