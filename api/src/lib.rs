//! # Launchkit API
//!
//! Actix-web front end for SMS segmentation and the SMS marketing service
//! switch.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
