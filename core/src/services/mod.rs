//! Business services containing domain logic.

pub mod segmentation;
pub mod sms;

pub use segmentation::{estimate_cost, segment, segment_count, Encoding, SegmentationResult};
pub use sms::{SandboxOperations, ServiceMode, ServiceSwitch, SmsMarketingService, SwitchConfig};
