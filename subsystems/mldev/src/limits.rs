//! # Hardware Limits
//!
//! Fixed upper bounds of a device class. Each driver injects one of these
//! per hardware variant instead of compiling the numbers into its ops, so
//! several variants can share one driver.

use crate::info::DevInfo;

/// Hardware limits of a device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwLimits {
    /// Maximum number of concurrently loaded models
    pub max_models: u16,
    /// Maximum number of queue pairs per device
    pub max_queue_pairs: u16,
    /// Maximum number of descriptors per queue pair
    pub max_desc_per_qp: u16,
    /// Maximum number of segments per buffer
    pub max_segments: u16,
    /// Minimum buffer alignment, in bytes
    pub align_size: u16,
}

impl HwLimits {
    /// Build a capability descriptor for a device bound to `driver_name`
    pub const fn describe(&self, driver_name: &'static str) -> DevInfo {
        DevInfo {
            driver_name,
            max_models: self.max_models,
            max_queue_pairs: self.max_queue_pairs,
            max_desc: self.max_desc_per_qp,
            max_segments: self.max_segments,
            min_align_size: self.align_size,
        }
    }
}

static_assertions::assert_impl_all!(HwLimits: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let limits = HwLimits {
            max_models: 8,
            max_queue_pairs: 16,
            max_desc_per_qp: 512,
            max_segments: 2,
            align_size: 64,
        };
        let info = limits.describe("ml_test");
        assert_eq!(info.driver_name, "ml_test");
        assert_eq!(info.max_models, 8);
        assert_eq!(info.max_queue_pairs, 16);
        assert_eq!(info.max_desc, 512);
        assert_eq!(info.max_segments, 2);
        assert_eq!(info.min_align_size, 64);
    }
}
