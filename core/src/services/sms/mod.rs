//! SMS marketing: provider contract, shared validation and the service switch.

pub mod mode;
pub mod switch;
pub mod traits;
pub mod validation;
pub mod webhook;

#[cfg(test)]
mod tests;

pub use mode::{ServiceMode, SwitchConfig};
pub use switch::ServiceSwitch;
pub use traits::{SandboxOperations, SmsMarketingService};
pub use validation::{
    clamp_history_limit, normalize_auto_reply, require_id, validate_message_content,
    validate_new_contact, validate_schedule, DEFAULT_HISTORY_LIMIT, MAX_AUTO_REPLY_LENGTH,
    MAX_HISTORY_LIMIT,
};
pub use webhook::{find_auto_reply, sign_payload, verify_signature};
