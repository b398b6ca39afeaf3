//! Domain entities of the SMS marketing integration.

pub mod account;
pub mod audience;
pub mod auto_reply;
pub mod campaign;
pub mod message;
pub mod webhook;

// Re-export commonly used types
pub use account::AccountBalance;
pub use audience::{Contact, NewContact, SmsList, SubscriptionStatus};
pub use auto_reply::{AutoReply, NewAutoReply};
pub use campaign::CampaignStats;
pub use message::{Message, MessageStatus};
pub use webhook::{
    WebhookEvent, WebhookExample, WebhookOutcome, WebhookPayload, EVENT_CONTACT_UNSUBSCRIBED,
    EVENT_MESSAGE_DELIVERED, EVENT_MESSAGE_FAILED, EVENT_MESSAGE_RECEIVED,
};
