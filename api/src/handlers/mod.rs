//! Response helpers shared by all route handlers

pub mod error;
pub mod request_id;
pub mod response;

pub use error::{
    domain_error_response, error_response, switch_error_response, validation_error_response,
};
pub use request_id::{RequestIdExt, REQUEST_ID_HEADER};
