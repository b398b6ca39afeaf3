//! Type definitions shared by every layer
//!
//! - `response` - the JSON envelope returned by every endpoint

pub mod response;

pub use response::ApiResponse;
