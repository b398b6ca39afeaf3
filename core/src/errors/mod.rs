//! Domain-specific error types and error handling.

mod domain_error;
mod switch_error;


pub use domain_error::{DomainError, ErrorKind};
pub use switch_error::SwitchError;

pub type DomainResult<T> = Result<T, DomainError>;
