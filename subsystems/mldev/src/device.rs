//! # ML Device Handle
//!
//! The host framework owns one [`MlDevice`] per accelerator and lends it to
//! the driver's control operations. Driver-specific data, including the
//! lifecycle state, lives in the private payload `P` so that only the driver
//! can move the device between states.

use crate::bus::BusDevice;
use crate::error::{MlDevError, MlDevResult};

/// Maximum length of an ML device name, in bytes
pub const RTE_ML_STR_MAX: usize = 128;

/// Bounded device name
pub type DeviceName = heapless::String<RTE_ML_STR_MAX>;

/// Build a [`DeviceName`], rejecting names longer than [`RTE_ML_STR_MAX`]
pub fn device_name(name: &str) -> MlDevResult<DeviceName> {
    let mut out = DeviceName::new();
    out.push_str(name).map_err(|()| MlDevError::InvalidArgument)?;
    Ok(out)
}

/// ML device handle
#[derive(Debug)]
pub struct MlDevice<P> {
    /// Device identifier assigned by the host
    dev_id: u16,
    /// Device name
    name: DeviceName,
    /// Underlying bus device
    device: BusDevice,
    /// Driver-private data
    private: P,
}

impl<P> MlDevice<P> {
    /// Create a device handle around driver-private data
    pub fn new(dev_id: u16, name: &str, device: BusDevice, private: P) -> MlDevResult<Self> {
        Ok(Self {
            dev_id,
            name: device_name(name)?,
            device,
            private,
        })
    }

    /// Device identifier
    pub fn dev_id(&self) -> u16 {
        self.dev_id
    }

    /// Device name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying bus device
    pub fn device(&self) -> &BusDevice {
        &self.device
    }

    /// Driver-private data
    pub fn private(&self) -> &P {
        &self.private
    }

    /// Mutable driver-private data
    pub fn private_mut(&mut self) -> &mut P {
        &mut self.private
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_name_bounds() {
        assert_eq!(device_name("ml0").map(|n| n.len()), Ok(3));

        let long = "x".repeat(RTE_ML_STR_MAX + 1);
        assert_eq!(device_name(&long), Err(MlDevError::InvalidArgument));

        let exact = "x".repeat(RTE_ML_STR_MAX);
        assert!(device_name(&exact).is_ok());
    }

    #[test]
    fn test_device_accessors() {
        let bus = BusDevice::new(device_name("0000:00:10.0").unwrap(), "ml_test");
        let mut dev = MlDevice::new(3, "ml_dev_3", bus, 7u32).unwrap();

        assert_eq!(dev.dev_id(), 3);
        assert_eq!(dev.name(), "ml_dev_3");
        assert_eq!(dev.device().name(), "0000:00:10.0");
        assert_eq!(dev.device().driver_name(), "ml_test");

        *dev.private_mut() += 1;
        assert_eq!(*dev.private(), 8);
    }
}
