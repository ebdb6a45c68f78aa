//! # Capability Descriptor
//!
//! Snapshot of the hardware limits of a device class, as reported by a
//! driver's `dev_info_get`. A fresh descriptor is built on every query.

/// ML device capability descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DevInfo {
    /// Name of the driver bound to the device
    pub driver_name: &'static str,
    /// Maximum number of models that can be loaded at once
    pub max_models: u16,
    /// Maximum number of queue pairs
    pub max_queue_pairs: u16,
    /// Maximum number of descriptors per queue pair
    pub max_desc: u16,
    /// Maximum number of segments per buffer
    pub max_segments: u16,
    /// Minimum alignment of buffers, in bytes
    pub min_align_size: u16,
}

impl DevInfo {
    /// Reset the descriptor to its zero-initialised form
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

static_assertions::assert_impl_all!(DevInfo: Send, Sync, Copy);
