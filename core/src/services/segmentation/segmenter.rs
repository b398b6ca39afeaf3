//! Carrier-style SMS segmentation and cost estimation
//!
//! A message is classified once, message-wide: a single character above the
//! 7-bit range puts the whole message in the UCS-2 class. A message that fits
//! the single-segment limit is sent as one segment; otherwise every segment,
//! the first included, is cut at the concatenated limit (the remaining
//! octets carry the concatenation header).

use serde::{Deserialize, Serialize};

pub const GSM7_SINGLE_SEGMENT_LIMIT: usize = 160;
pub const GSM7_CONCATENATED_SEGMENT_LIMIT: usize = 153;
pub const UNICODE_SINGLE_SEGMENT_LIMIT: usize = 70;
pub const UNICODE_CONCATENATED_SEGMENT_LIMIT: usize = 67;

/// Cost of one GSM-7 segment, in account currency
pub const GSM7_SEGMENT_COST: f64 = 0.0075;
/// Cost of one UCS-2 segment, in account currency
pub const UNICODE_SEGMENT_COST: f64 = 0.015;

/// Longest message callers may send; not enforced by `segment`
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// Message-wide encoding class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Gsm7,
    Ucs2,
}

impl Encoding {
    /// UCS-2 if any code point is above 127, GSM-7 otherwise
    pub fn classify(message: &str) -> Self {
        if message.chars().any(|c| c as u32 > 127) {
            Encoding::Ucs2
        } else {
            Encoding::Gsm7
        }
    }

    pub fn is_unicode(self) -> bool {
        self == Encoding::Ucs2
    }

    pub fn single_segment_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_SINGLE_SEGMENT_LIMIT,
            Encoding::Ucs2 => UNICODE_SINGLE_SEGMENT_LIMIT,
        }
    }

    pub fn concatenated_segment_limit(self) -> usize {
        match self {
            Encoding::Gsm7 => GSM7_CONCATENATED_SEGMENT_LIMIT,
            Encoding::Ucs2 => UNICODE_CONCATENATED_SEGMENT_LIMIT,
        }
    }

    pub fn segment_cost(self) -> f64 {
        match self {
            Encoding::Gsm7 => GSM7_SEGMENT_COST,
            Encoding::Ucs2 => UNICODE_SEGMENT_COST,
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Gsm7 => write!(f, "gsm7"),
            Encoding::Ucs2 => write!(f, "ucs2"),
        }
    }
}

/// One carrier-level message unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSegment {
    pub content: String,
    /// Length of `content` in code points
    pub character_count: usize,
    pub is_unicode: bool,
    pub estimated_cost: f64,
}

/// Segments of a message with their combined cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub segments: Vec<MessageSegment>,
    pub total_cost: f64,
    /// Length of the original message in code points
    pub total_characters: usize,
    pub encoding: Encoding,
}

impl SegmentationResult {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_unicode(&self) -> bool {
        self.encoding.is_unicode()
    }
}

/// Split a message into carrier segments and price them
///
/// Total over all inputs: the empty string yields no segments and zero cost.
pub fn segment(message: &str) -> SegmentationResult {
    let encoding = Encoding::classify(message);
    let chars: Vec<char> = message.chars().collect();
    let total_characters = chars.len();

    let limit = if total_characters <= encoding.single_segment_limit() {
        encoding.single_segment_limit()
    } else {
        encoding.concatenated_segment_limit()
    };

    let segments: Vec<MessageSegment> = chars
        .chunks(limit)
        .map(|chunk| MessageSegment {
            content: chunk.iter().collect(),
            character_count: chunk.len(),
            is_unicode: encoding.is_unicode(),
            estimated_cost: encoding.segment_cost(),
        })
        .collect();

    let total_cost = segments.iter().map(|s| s.estimated_cost).sum();

    SegmentationResult {
        segments,
        total_cost,
        total_characters,
        encoding,
    }
}

/// Number of segments `segment` would produce, without building them
pub fn segment_count(message: &str) -> usize {
    let encoding = Encoding::classify(message);
    let length = message.chars().count();
    if length == 0 {
        0
    } else if length <= encoding.single_segment_limit() {
        1
    } else {
        let limit = encoding.concatenated_segment_limit();
        (length + limit - 1) / limit
    }
}

/// Cost of sending `message` to `recipients` contacts
pub fn estimate_cost(message: &str, recipients: u32) -> f64 {
    segment(message).total_cost * recipients as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hello() {
        let result = segment("Hello");
        assert_eq!(result.segment_count(), 1);
        let first = &result.segments[0];
        assert_eq!(first.content, "Hello");
        assert_eq!(first.character_count, 5);
        assert!(!first.is_unicode);
        assert_eq!(first.estimated_cost, GSM7_SEGMENT_COST);
        assert_eq!(result.total_characters, 5);
        assert_eq!(result.encoding, Encoding::Gsm7);
    }

    #[test]
    fn test_empty_message() {
        let result = segment("");
        assert!(result.is_empty());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.total_characters, 0);
        assert_eq!(segment_count(""), 0);
    }

    #[test]
    fn test_two_hundred_ascii_characters() {
        let message = "a".repeat(200);
        let result = segment(&message);
        assert_eq!(result.segment_count(), 2);
        assert_eq!(result.segments[0].character_count, 153);
        assert_eq!(result.segments[1].character_count, 47);
        assert!(approx_eq(result.total_cost, 2.0 * GSM7_SEGMENT_COST));
    }

    #[test]
    fn test_single_segment_boundaries() {
        assert_eq!(segment(&"x".repeat(160)).segment_count(), 1);
        let over = segment(&"x".repeat(161));
        assert_eq!(over.segment_count(), 2);
        assert_eq!(over.segments[0].character_count, 153);
        assert_eq!(over.segments[1].character_count, 8);
    }

    #[test]
    fn test_unicode_limits() {
        let fits = format!("{}é", "a".repeat(69));
        assert_eq!(segment(&fits).segment_count(), 1);

        let message = format!("é{}", "a".repeat(70));
        let result = segment(&message);
        assert_eq!(result.encoding, Encoding::Ucs2);
        assert_eq!(result.segment_count(), 2);
        assert_eq!(result.segments[0].character_count, 67);
        assert_eq!(result.segments[1].character_count, 4);
        assert!(result.segments.iter().all(|s| s.is_unicode));
        assert!(approx_eq(result.total_cost, 2.0 * UNICODE_SEGMENT_COST));
    }

    #[test]
    fn test_late_unicode_character_marks_every_segment() {
        let message = format!("{}🎉", "a".repeat(300));
        let result = segment(&message);
        assert!(result.segments.iter().all(|s| s.is_unicode));
        assert_eq!(result.total_characters, 301);
        assert_eq!(result.segment_count(), 5);
    }

    #[test]
    fn test_splits_on_code_points() {
        let message = "ü".repeat(100);
        let result = segment(&message);
        let rebuilt: String = result.segments.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(rebuilt, message);
        assert_eq!(result.segments[0].content.chars().count(), 67);
    }

    #[test]
    fn test_segment_count_matches_segment() {
        for len in [0, 1, 70, 71, 153, 160, 161, 306, 307, 1600] {
            let ascii = "z".repeat(len);
            assert_eq!(segment_count(&ascii), segment(&ascii).segment_count(), "ascii {}", len);
            let unicode = "ж".repeat(len);
            assert_eq!(segment_count(&unicode), segment(&unicode).segment_count(), "ucs2 {}", len);
        }
    }

    #[test]
    fn test_estimate_cost_scales_with_recipients() {
        assert!(approx_eq(estimate_cost("Hello", 100), 100.0 * GSM7_SEGMENT_COST));
        assert_eq!(estimate_cost("Hello", 0), 0.0);
    }
}
