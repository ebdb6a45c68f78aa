//! # Helix ML CNXK
//!
//! Driver for the ML inference engine found on Marvell CN10K SoCs.
//!
//! Only the control plane lives here. The host framework probes the PCI
//! function, builds an [`MlDevice`](helix_mldev::MlDevice) around a
//! [`Cn10kMlDev`], and then drives it through [`Cn10kMlOps`]:
//!
//! - `dev_info_get`: report the CN10K (or injected) hardware limits
//! - `dev_configure`: validate against those limits and the lifecycle state
//! - `dev_close`: mark the device closed, then remove the PCI device

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(test)]
extern crate std;

pub mod dev;
pub mod ops;

pub use dev::{probe, Cn10kMlDev, CN10K_LIMITS, ML_CN10K_DRIVER_NAME};
pub use ops::Cn10kMlOps;

/// Log target for all diagnostics emitted by this driver
pub const LOG_TARGET: &str = "ml_cnxk";
