//! Service mode and the configuration it is derived from

use serde::{Deserialize, Serialize};

/// Which backing implementation serves calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    Mock,
    Real,
}

impl ServiceMode {
    pub fn is_mock(self) -> bool {
        self == ServiceMode::Mock
    }
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceMode::Mock => write!(f, "mock"),
            ServiceMode::Real => write!(f, "real"),
        }
    }
}

impl std::str::FromStr for ServiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ServiceMode::Mock),
            "real" | "live" => Ok(ServiceMode::Real),
            _ => Err(format!("Invalid service mode: {}", s)),
        }
    }
}

/// Inputs for the initial mode of a service switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Explicit request to use the mock provider
    pub use_mocks: bool,
    /// Running under a test harness
    pub test_context: bool,
}

impl SwitchConfig {
    pub fn new(use_mocks: bool, test_context: bool) -> Self {
        Self {
            use_mocks,
            test_context,
        }
    }

    /// Mock if either flag asks for it
    pub fn initial_mode(&self) -> ServiceMode {
        if self.use_mocks || self.test_context {
            ServiceMode::Mock
        } else {
            ServiceMode::Real
        }
    }
}

impl From<&lk_shared::SmsConfig> for SwitchConfig {
    fn from(config: &lk_shared::SmsConfig) -> Self {
        Self::new(config.use_mocks, config.test_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_truth_table() {
        assert_eq!(SwitchConfig::new(false, false).initial_mode(), ServiceMode::Real);
        assert_eq!(SwitchConfig::new(true, false).initial_mode(), ServiceMode::Mock);
        assert_eq!(SwitchConfig::new(false, true).initial_mode(), ServiceMode::Mock);
        assert_eq!(SwitchConfig::new(true, true).initial_mode(), ServiceMode::Mock);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("MOCK".parse::<ServiceMode>().unwrap(), ServiceMode::Mock);
        assert_eq!("live".parse::<ServiceMode>().unwrap(), ServiceMode::Real);
        assert!("hybrid".parse::<ServiceMode>().is_err());
    }
}
