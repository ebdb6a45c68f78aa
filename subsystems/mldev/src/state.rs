//! # Device Lifecycle State

use core::fmt;

/// Lifecycle state of an ML device
///
/// A device starts in [`DeviceState::Probed`] once the bus layer has
/// discovered it, and ends in [`DeviceState::Closed`]. Closed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum DeviceState {
    /// Discovered, not yet configured
    #[default]
    Probed     = 0,
    /// Configured, ready to be started
    Configured = 1,
    /// Started, processing work
    Started    = 2,
    /// Closed, bus resource released or being released
    Closed     = 3,
}

impl DeviceState {
    /// All lifecycle states, in lifecycle order
    pub const ALL: [DeviceState; 4] = [
        DeviceState::Probed,
        DeviceState::Configured,
        DeviceState::Started,
        DeviceState::Closed,
    ];

    /// Uppercase name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            DeviceState::Probed => "PROBED",
            DeviceState::Configured => "CONFIGURED",
            DeviceState::Started => "STARTED",
            DeviceState::Closed => "CLOSED",
        }
    }

    /// Check if the device can still be driven by control operations
    pub const fn is_operable(self) -> bool {
        !matches!(self, DeviceState::Closed)
    }

    /// Check if this is the terminal state
    pub const fn is_terminal(self) -> bool {
        matches!(self, DeviceState::Closed)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static_assertions::assert_impl_all!(DeviceState: Send, Sync, Copy);
static_assertions::assert_eq_size!(DeviceState, u32);
