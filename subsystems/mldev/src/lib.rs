//! # Helix ML Device Framework
//!
//! Control-plane contracts shared by every ML accelerator driver in Helix.
//!
//! The framework does not drive hardware itself. It defines the vocabulary a
//! driver speaks to the host device-management layer:
//!
//! - **Device handle**: [`MlDevice`], owned by the host, lent to each control op
//! - **Lifecycle**: [`DeviceState`] and the pure rules in [`validate`]
//! - **Capabilities**: [`DevInfo`], filled from per-class [`HwLimits`]
//! - **Configuration**: [`DevConfig`], checked against the reported limits
//! - **Collaborators**: [`BusManager`] for device removal
//! - **Operations table**: [`MlDevOps`], implemented once per driver
//!
//! ## Lifecycle
//!
//! ```text
//!   probe ──▶ PROBED ──configure──▶ CONFIGURED ──(start)──▶ STARTED
//!                                    │     ▲                    │
//!                                    └─────┘ reconfigure        │
//!                                                               ▼
//!   any state ──────────────────── close ─────────────────▶ CLOSED
//! ```
//!
//! Control calls are synchronous and never block. The host framework is
//! expected to serialize control-plane calls per device; nothing in this
//! crate takes a lock.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(test)]
extern crate std;

// =============================================================================
// MODULE EXPORTS
// =============================================================================

pub mod bus;
pub mod config;
pub mod device;
pub mod error;
pub mod info;
pub mod limits;
pub mod ops;
pub mod state;
pub mod validate;

// Re-exports for convenience
pub use bus::{BusDevice, BusError, BusManager};
pub use config::DevConfig;
pub use device::{DeviceName, MlDevice, RTE_ML_STR_MAX};
pub use error::{MlDevError, MlDevResult};
pub use info::DevInfo;
pub use limits::HwLimits;
pub use ops::MlDevOps;
pub use state::DeviceState;
pub use validate::{Rejection, Transition};
