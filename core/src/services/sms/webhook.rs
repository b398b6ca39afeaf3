//! Webhook signatures: hex-encoded HMAC-SHA256 of the raw request body

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::entities::AutoReply;

type HmacSha256 = Hmac<Sha256>;

/// Signature the provider attaches to a webhook body
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    // HMAC accepts keys of any length
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time check of a signature; a `sha256=` prefix is accepted
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> bool {
    let provided = signature.trim();
    let provided = provided.strip_prefix("sha256=").unwrap_or(provided);
    let expected = sign_payload(secret, payload);
    constant_time_eq(expected.as_bytes(), provided.to_ascii_lowercase().as_bytes())
}

/// First active auto-reply triggered by an inbound text
///
/// List-specific replies win over global ones.
pub fn find_auto_reply<'a>(
    replies: &'a [AutoReply],
    inbound_text: &str,
    list_id: Option<&str>,
) -> Option<&'a AutoReply> {
    let candidates = || replies.iter().filter(|r| r.matches(inbound_text));
    candidates()
        .find(|r| r.list_id.is_some() && r.list_id.as_deref() == list_id)
        .or_else(|| candidates().find(|r| r.list_id.is_none()))
}
