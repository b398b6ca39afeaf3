//! Mock SMS marketing provider

pub mod sample_data;
mod service;

pub use service::{MockSmsMarketingService, DEFAULT_MOCK_DELAY, MOCK_WEBHOOK_SECRET};
