use thiserror::Error;

use crate::services::sms::ServiceMode;

/// Errors raised by the service switch itself
///
/// Distinct from `DomainError`: these indicate a caller mistake (asking for a
/// sandbox-only operation against the live provider), not a business outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    #[error("Operation '{operation}' is only available in mock mode (current mode: {mode})")]
    ModeRestricted {
        operation: &'static str,
        mode: ServiceMode,
    },
}
