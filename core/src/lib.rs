//! # Launchkit SMS Core
//!
//! Domain layer for the SMS marketing service: message segmentation and
//! pricing, the provider contract shared by the mock and the live provider,
//! and the switch that chooses between them at runtime.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
