//! Seed records for the mock provider

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde_json::json;

use lk_core::domain::entities::{
    AutoReply, CampaignStats, Contact, Message, MessageStatus, SmsList, SubscriptionStatus,
    WebhookExample, WebhookPayload, EVENT_CONTACT_UNSUBSCRIBED, EVENT_MESSAGE_DELIVERED, EVENT_MESSAGE_FAILED,
    EVENT_MESSAGE_RECEIVED,
};
use lk_core::services::segmentation::segment;

pub const SAMPLE_BALANCE: f64 = 125.50;
pub const SAMPLE_CURRENCY: &str = "USD";

/// Fixed seed timestamp so sample records are stable across runs
static SEEDED_AT: Lazy<DateTime<Utc>> =
    Lazy::new(|| DateTime::from_timestamp(1_717_200_000, 0).unwrap_or_default());

fn days_ago(days: i64) -> DateTime<Utc> {
    *SEEDED_AT - Duration::days(days)
}

pub fn lists() -> Vec<SmsList> {
    vec![
        SmsList {
            id: "list_001".to_string(),
            name: "Newsletter Subscribers".to_string(),
            description: Some("Weekly product updates".to_string()),
            subscriber_count: 3,
            created_at: days_ago(90),
        },
        SmsList {
            id: "list_002".to_string(),
            name: "VIP Customers".to_string(),
            description: Some("Early access and exclusive offers".to_string()),
            subscriber_count: 2,
            created_at: days_ago(60),
        },
        SmsList {
            id: "list_003".to_string(),
            name: "Event Attendees".to_string(),
            description: None,
            subscriber_count: 0,
            created_at: days_ago(14),
        },
    ]
}

fn contact(
    id: &str,
    list_id: &str,
    phone: &str,
    first_name: &str,
    status: SubscriptionStatus,
    days: i64,
) -> Contact {
    Contact {
        id: id.to_string(),
        list_id: list_id.to_string(),
        phone: phone.to_string(),
        first_name: Some(first_name.to_string()),
        last_name: None,
        email: None,
        status,
        subscribed_at: days_ago(days),
    }
}

/// Subscriber counts in `lists()` match the subscribed contacts here
pub fn contacts() -> Vec<Contact> {
    use SubscriptionStatus::{Subscribed, Unsubscribed};
    vec![
        contact("contact_001", "list_001", "+14155550101", "Ada", Subscribed, 80),
        contact("contact_002", "list_001", "+14155550102", "Grace", Subscribed, 75),
        contact("contact_003", "list_001", "+447700900123", "Alan", Subscribed, 40),
        contact("contact_004", "list_002", "+14155550104", "Linus", Subscribed, 50),
        contact("contact_005", "list_002", "+33612345678", "Margaret", Subscribed, 30),
        contact("contact_006", "list_003", "+14155550106", "Dennis", Unsubscribed, 10),
    ]
}

fn message(
    id: &str,
    list_id: &str,
    content: &str,
    status: MessageStatus,
    recipients: u32,
    days: i64,
) -> Message {
    let segmentation = segment(content);
    Message {
        id: id.to_string(),
        list_id: list_id.to_string(),
        content: content.to_string(),
        status,
        recipients,
        segments: segmentation.segment_count() as u32,
        encoding: segmentation.encoding,
        estimated_cost: segmentation.total_cost * f64::from(recipients),
        scheduled_at: None,
        created_at: days_ago(days),
    }
}

/// Oldest first; history reverses it
pub fn messages() -> Vec<Message> {
    vec![
        message(
            "msg_001",
            "list_001",
            "This week's update: new dashboards and faster exports. Reply STOP to opt out.",
            MessageStatus::Delivered,
            3,
            7,
        ),
        message(
            "msg_002",
            "list_002",
            "VIP early access starts tomorrow 🎉 Use code VIP20 at checkout.",
            MessageStatus::Delivered,
            2,
            3,
        ),
        message(
            "msg_003",
            "list_001",
            "Reminder: the spring sale ends tonight at midnight.",
            MessageStatus::Sent,
            3,
            1,
        ),
    ]
}

pub fn campaigns() -> Vec<CampaignStats> {
    vec![
        CampaignStats::from_counts("camp_001", "Spring Sale", 1200, 1164, 291, 12, 9.0),
        CampaignStats::from_counts("camp_002", "Welcome Series", 450, 441, 88, 3, 3.38),
    ]
}

pub fn auto_replies() -> Vec<AutoReply> {
    vec![
        AutoReply {
            id: "reply_001".to_string(),
            keyword: "INFO".to_string(),
            response: "Launchkit: product news and offers. Reply STOP to opt out.".to_string(),
            list_id: None,
            active: true,
            created_at: days_ago(60),
        },
        AutoReply {
            id: "reply_002".to_string(),
            keyword: "DEALS".to_string(),
            response: "VIP deal of the week: 20% off with code VIP20.".to_string(),
            list_id: Some("list_002".to_string()),
            active: true,
            created_at: days_ago(30),
        },
    ]
}

pub fn webhook_examples() -> Vec<WebhookExample> {
    vec![
        WebhookExample {
            event_type: EVENT_MESSAGE_RECEIVED.to_string(),
            description: "Inbound text from a subscriber; may trigger an auto-reply".to_string(),
            payload: WebhookPayload::new(
                EVENT_MESSAGE_RECEIVED,
                json!({ "from": "+14155550101", "text": "INFO", "listId": "list_001" }),
            ),
        },
        WebhookExample {
            event_type: EVENT_MESSAGE_DELIVERED.to_string(),
            description: "Delivery receipt for an outbound message".to_string(),
            payload: WebhookPayload::new(
                EVENT_MESSAGE_DELIVERED,
                json!({ "messageId": "msg_003" }),
            ),
        },
        WebhookExample {
            event_type: EVENT_MESSAGE_FAILED.to_string(),
            description: "Carrier rejected an outbound message".to_string(),
            payload: WebhookPayload::new(
                EVENT_MESSAGE_FAILED,
                json!({ "messageId": "msg_003", "reason": "Carrier rejected destination" }),
            ),
        },
        WebhookExample {
            event_type: EVENT_CONTACT_UNSUBSCRIBED.to_string(),
            description: "Subscriber replied STOP".to_string(),
            payload: WebhookPayload::new(
                EVENT_CONTACT_UNSUBSCRIBED,
                json!({ "listId": "list_001", "phone": "+14155550102" }),
            ),
        },
    ]
}
