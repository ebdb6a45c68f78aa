//! # ML Device Operations Table
//!
//! The host framework reaches a driver only through this trait. Arguments are
//! optional because the host dispatch layer forwards caller-supplied
//! references as-is; every op must reject an absent required argument with
//! [`MlDevError::InvalidArgument`] before touching the device.

use crate::config::DevConfig;
use crate::device::MlDevice;
use crate::error::{MlDevError, MlDevResult};
use crate::info::DevInfo;

/// Control operations implemented by an ML device driver
pub trait MlDevOps {
    /// Driver-private data carried by each device handle
    type Private;

    /// Fill `info` with the capability limits of `dev`
    fn dev_info_get(
        &self,
        dev: Option<&MlDevice<Self::Private>>,
        info: Option<&mut DevInfo>,
    ) -> MlDevResult<()>;

    /// Validate `conf` and move `dev` to the configured state
    fn dev_configure(
        &self,
        dev: Option<&mut MlDevice<Self::Private>>,
        conf: Option<&DevConfig>,
    ) -> MlDevResult<()>;

    /// Close `dev` and release its bus resource
    fn dev_close(&self, dev: Option<&mut MlDevice<Self::Private>>) -> MlDevResult<()>;

    /// Query the capability descriptor of `dev` by value
    fn info(&self, dev: &MlDevice<Self::Private>) -> MlDevResult<DevInfo> {
        let mut info = DevInfo::default();
        self.dev_info_get(Some(dev), Some(&mut info))?;
        Ok(info)
    }
}

/// Unwrap a required op argument
pub fn required<T>(arg: Option<T>) -> MlDevResult<T> {
    arg.ok_or(MlDevError::InvalidArgument)
}
