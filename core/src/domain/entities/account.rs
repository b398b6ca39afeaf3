use serde::{Deserialize, Serialize};

/// Prepaid provider balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub balance: f64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Plain GSM-7 single-segment messages the balance still covers
    pub estimated_messages_remaining: u64,
}

impl AccountBalance {
    /// Build a balance, deriving how many single-segment messages it covers
    pub fn new(balance: f64, currency: impl Into<String>, segment_rate: f64) -> Self {
        let remaining = if segment_rate > 0.0 && balance > 0.0 {
            (balance / segment_rate).floor() as u64
        } else {
            0
        };
        Self {
            balance,
            currency: currency.into(),
            estimated_messages_remaining: remaining,
        }
    }
}
