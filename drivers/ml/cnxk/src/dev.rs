//! # CN10K ML Device
//!
//! Device-private data and hardware limits of the CN10K ML block.

use helix_mldev::{BusDevice, DeviceState, HwLimits, MlDevResult, MlDevice};

use crate::LOG_TARGET;

// =============================================================================
// DEVICE CLASS
// =============================================================================

/// Name of the CN10K ML driver
pub const ML_CN10K_DRIVER_NAME: &str = "ml_cn10k";

/// Hardware limits of the CN10K ML block
pub const CN10K_LIMITS: HwLimits = HwLimits {
    max_models: 16,
    max_queue_pairs: 1,
    max_desc_per_qp: 1024,
    max_segments: 1,
    align_size: 128,
};

// Buffers are aligned to a power of two, and at least one model must fit.
static_assertions::const_assert!(CN10K_LIMITS.align_size.is_power_of_two());
static_assertions::const_assert!(CN10K_LIMITS.max_models > 0);
static_assertions::const_assert!(CN10K_LIMITS.max_queue_pairs > 0);

// =============================================================================
// DEVICE PRIVATE DATA
// =============================================================================

/// CN10K driver-private device data
///
/// The lifecycle state is only written by the configure and close ops.
#[derive(Debug, Default)]
pub struct Cn10kMlDev {
    state: DeviceState,
}

impl Cn10kMlDev {
    /// Fresh private data for a just-probed device
    pub const fn new() -> Self {
        Self {
            state: DeviceState::Probed,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: DeviceState) {
        self.state = state;
    }
}

/// Build the device handle for a CN10K ML function found on the bus
pub fn probe(dev_id: u16, name: &str, device: BusDevice) -> MlDevResult<MlDevice<Cn10kMlDev>> {
    let dev = MlDevice::new(dev_id, name, device, Cn10kMlDev::new())?;

    log::debug!(
        target: LOG_TARGET,
        "{}: probed ML device on {} (dev_id = {})",
        dev.name(),
        dev.device().name(),
        dev.dev_id()
    );

    Ok(dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_mldev::device::device_name;
    use helix_mldev::MlDevError;

    #[test]
    fn test_probe_starts_probed() {
        let bus = BusDevice::new(device_name("0000:00:10.0").unwrap(), ML_CN10K_DRIVER_NAME);
        let dev = probe(0, "ml_probe", bus).unwrap();

        assert_eq!(dev.private().state(), DeviceState::Probed);
        assert_eq!(dev.device().driver_name(), ML_CN10K_DRIVER_NAME);
    }

    #[test]
    fn test_probe_rejects_long_name() {
        let bus = BusDevice::new(device_name("0000:00:10.0").unwrap(), ML_CN10K_DRIVER_NAME);
        let name = "m".repeat(helix_mldev::RTE_ML_STR_MAX + 1);
        assert_eq!(probe(0, &name, bus).err(), Some(MlDevError::InvalidArgument));
    }
}
