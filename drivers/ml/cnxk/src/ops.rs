//! # CN10K ML Control Operations

use helix_mldev::ops::required;
use helix_mldev::validate::{self, Transition};
use helix_mldev::{
    BusManager, DevConfig, DevInfo, DeviceState, HwLimits, MlDevError, MlDevOps, MlDevResult,
    MlDevice,
};

use crate::dev::{Cn10kMlDev, CN10K_LIMITS};
use crate::LOG_TARGET;

/// Operations table of the CN10K ML driver
///
/// Holds the hardware limits of the device class it serves and the bus
/// manager used to remove devices on close.
#[derive(Debug)]
pub struct Cn10kMlOps<B> {
    bus: B,
    limits: HwLimits,
}

impl<B: BusManager> Cn10kMlOps<B> {
    /// Operations for stock CN10K hardware
    pub const fn new(bus: B) -> Self {
        Self::with_limits(bus, CN10K_LIMITS)
    }

    /// Operations for a CN10K variant with different limits
    pub const fn with_limits(bus: B, limits: HwLimits) -> Self {
        Self { bus, limits }
    }

    /// Hardware limits reported by this driver instance
    pub fn limits(&self) -> &HwLimits {
        &self.limits
    }

    /// Bus manager used on close
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B: BusManager> MlDevOps for Cn10kMlOps<B> {
    type Private = Cn10kMlDev;

    fn dev_info_get(
        &self,
        dev: Option<&MlDevice<Cn10kMlDev>>,
        info: Option<&mut DevInfo>,
    ) -> MlDevResult<()> {
        let (dev, info) = match (dev, info) {
            (Some(dev), Some(info)) => (dev, info),
            _ => return Err(MlDevError::InvalidArgument),
        };

        info.clear();
        *info = self.limits.describe(dev.device().driver_name());

        Ok(())
    }

    fn dev_configure(
        &self,
        dev: Option<&mut MlDevice<Cn10kMlDev>>,
        conf: Option<&DevConfig>,
    ) -> MlDevResult<()> {
        let (dev, conf) = match (dev, conf) {
            (Some(dev), Some(conf)) => (dev, conf),
            _ => {
                log::error!(target: LOG_TARGET, "configure called without device or config");
                return Err(MlDevError::InvalidArgument);
            },
        };

        let info = self.info(dev)?;

        let transition = match validate::check_configure(dev.private().state(), conf, &info) {
            Ok(transition) => transition,
            Err(rejection) => {
                log::error!(target: LOG_TARGET, "{}: {}", dev.name(), rejection);
                return Err(rejection.into());
            },
        };

        match transition {
            Transition::Configure => log::debug!(
                target: LOG_TARGET,
                "{}: configuring ML device, nb_queue_pairs = {}, nb_models = {}",
                dev.name(),
                conf.nb_queue_pairs,
                conf.nb_models
            ),
            Transition::Reconfigure => log::debug!(
                target: LOG_TARGET,
                "{}: re-configuring ML device, nb_queue_pairs = {}, nb_models = {}",
                dev.name(),
                conf.nb_queue_pairs,
                conf.nb_models
            ),
        }

        dev.private_mut().set_state(transition.next_state());

        Ok(())
    }

    fn dev_close(&self, dev: Option<&mut MlDevice<Cn10kMlDev>>) -> MlDevResult<()> {
        let dev = required(dev)?;

        let previous = dev.private().state();
        dev.private_mut().set_state(DeviceState::Closed);

        log::debug!(
            target: LOG_TARGET,
            "{}: closing ML device (was {}), removing {}",
            dev.name(),
            previous,
            dev.device().name()
        );

        self.bus.remove(dev.device()).map_err(|e| {
            log::error!(
                target: LOG_TARGET,
                "{}: failed to remove {}: {}",
                dev.name(),
                dev.device().name(),
                e
            );
            MlDevError::from(e)
        })
    }
}
