use serde::{Deserialize, Serialize};

/// Delivery statistics for a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    pub campaign_id: String,
    pub name: String,
    pub sent: u32,
    pub delivered: u32,
    pub failed: u32,
    pub clicks: u32,
    pub opt_outs: u32,
    /// Delivered / sent, in percent
    pub delivery_rate: f64,
    /// Clicks / delivered, in percent
    pub click_rate: f64,
    pub cost: f64,
}

impl CampaignStats {
    /// Build stats from raw counters, deriving the rates
    pub fn from_counts(
        campaign_id: impl Into<String>,
        name: impl Into<String>,
        sent: u32,
        delivered: u32,
        clicks: u32,
        opt_outs: u32,
        cost: f64,
    ) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            name: name.into(),
            sent,
            delivered,
            failed: sent.saturating_sub(delivered),
            clicks,
            opt_outs,
            delivery_rate: percentage(delivered, sent),
            click_rate: percentage(clicks, delivered),
            cost,
        }
    }
}

/// Percentage rounded to two decimals; zero when the base is zero
fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}
