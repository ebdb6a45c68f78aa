//! # Bus Collaborator
//!
//! The ML device sits on a bus (PCI on CN10K) that the host enumerates.
//! Drivers only need two things from it: the identity of the underlying bus
//! device, and a way to remove that device on close.

use core::fmt;

use crate::device::DeviceName;

// =============================================================================
// BUS DEVICE
// =============================================================================

/// Bus-level identity of an ML device and the driver bound to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusDevice {
    /// Bus address or name (e.g. `0000:00:10.0`)
    name: DeviceName,
    /// Name of the driver bound to this bus device
    driver_name: &'static str,
}

impl BusDevice {
    /// Create a bus device record
    pub fn new(name: DeviceName, driver_name: &'static str) -> Self {
        Self { name, driver_name }
    }

    /// Bus address or name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound driver name
    pub fn driver_name(&self) -> &'static str {
        self.driver_name
    }
}

// =============================================================================
// BUS ERROR
// =============================================================================

/// Error returned by the bus manager, as a raw negative errno code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BusError(i32);

impl BusError {
    /// Wrap a raw bus error code
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Raw error code, exactly as the bus manager reported it
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus code {}", self.0)
    }
}

// =============================================================================
// BUS MANAGER
// =============================================================================

/// Bus resource manager
///
/// Implemented by the host's bus layer. Drivers call it exactly once per
/// close and forward the outcome without interpretation or retry.
pub trait BusManager {
    /// Remove the bus resource backing `device`
    fn remove(&self, device: &BusDevice) -> Result<(), BusError>;
}

impl<B: BusManager + ?Sized> BusManager for &B {
    fn remove(&self, device: &BusDevice) -> Result<(), BusError> {
        (**self).remove(device)
    }
}
