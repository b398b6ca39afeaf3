//! HTTP client for the live SMS marketing provider

mod service;
mod wire;

pub use service::HttpSmsMarketingService;
