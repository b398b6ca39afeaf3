//! Keyword-triggered automatic replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response sent automatically when an inbound message matches `keyword`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoReply {
    pub id: String,

    /// Upper-case trigger word
    pub keyword: String,

    pub response: String,

    /// Restrict the reply to one list; `None` applies to all lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,

    pub active: bool,

    pub created_at: DateTime<Utc>,
}

impl AutoReply {
    /// Whether an inbound text triggers this reply
    ///
    /// The first word of the text is compared case-insensitively.
    pub fn matches(&self, inbound_text: &str) -> bool {
        self.active
            && inbound_text
                .split_whitespace()
                .next()
                .map(|word| word.eq_ignore_ascii_case(&self.keyword))
                .unwrap_or(false)
    }
}

/// Input for creating an auto-reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAutoReply {
    pub keyword: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(keyword: &str, active: bool) -> AutoReply {
        AutoReply {
            id: "ar_001".to_string(),
            keyword: keyword.to_string(),
            response: "Thanks!".to_string(),
            list_id: None,
            active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_first_word_case_insensitive() {
        let reply = reply("STOP", true);
        assert!(reply.matches("stop"));
        assert!(reply.matches("  Stop please"));
        assert!(!reply.matches("please stop"));
        assert!(!reply.matches(""));
    }

    #[test]
    fn test_inactive_never_matches() {
        assert!(!reply("INFO", false).matches("info"));
    }
}
