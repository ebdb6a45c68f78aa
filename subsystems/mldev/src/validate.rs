//! # Configuration Validation
//!
//! The lifecycle rules as a pure function of `(state, request, limits)`.
//! Drivers wrap [`check_configure`] with their diagnostics and the single
//! state write; nothing in here logs or mutates.
//!
//! ## Rule Table
//!
//! | Current state | `configure` |
//! |---------------|-------------|
//! | `PROBED`      | allowed, becomes `CONFIGURED` |
//! | `CONFIGURED`  | allowed, stays `CONFIGURED` (parameters replaced) |
//! | `STARTED`     | rejected, `NotSupported` |
//! | `CLOSED`      | rejected, `NotSupported` |
//!
//! Limit checks run first, so an over-limit request is `InvalidArgument` in
//! every state.

use core::fmt;

use crate::config::DevConfig;
use crate::error::MlDevError;
use crate::info::DevInfo;
use crate::state::DeviceState;

// =============================================================================
// TRANSITION
// =============================================================================

/// Accepted configure transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First configuration of a probed device
    Configure,
    /// Re-configuration of an already configured device
    Reconfigure,
}

impl Transition {
    /// State the device enters once the transition is committed
    pub const fn next_state(self) -> DeviceState {
        DeviceState::Configured
    }
}

// =============================================================================
// REJECTION
// =============================================================================

/// Reason a configure request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Requested model count exceeds `max_models`
    TooManyModels {
        /// Requested model count
        requested: u16,
        /// Reported limit
        max: u16,
    },
    /// Requested queue-pair count exceeds `max_queue_pairs`
    TooManyQueuePairs {
        /// Requested queue-pair count
        requested: u16,
        /// Reported limit
        max: u16,
    },
    /// Device is started
    Started,
    /// Device is closed
    Closed,
}

impl Rejection {
    /// Error returned to the caller for this rejection
    pub const fn error(self) -> MlDevError {
        match self {
            Rejection::TooManyModels { .. } | Rejection::TooManyQueuePairs { .. } => {
                MlDevError::InvalidArgument
            },
            Rejection::Started | Rejection::Closed => MlDevError::NotSupported,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooManyModels { requested, max } => write!(
                f,
                "invalid device config, nb_models {} > max_models {}",
                requested, max
            ),
            Rejection::TooManyQueuePairs { requested, max } => write!(
                f,
                "invalid device config, nb_queue_pairs {} > max_queue_pairs {}",
                requested, max
            ),
            Rejection::Started => write!(f, "cannot reconfigure while started"),
            Rejection::Closed => write!(f, "cannot reconfigure after close"),
        }
    }
}

impl From<Rejection> for MlDevError {
    fn from(r: Rejection) -> Self {
        r.error()
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Check a configure request against the reported limits, then the state table
pub fn check_configure(
    state: DeviceState,
    conf: &DevConfig,
    info: &DevInfo,
) -> Result<Transition, Rejection> {
    if conf.nb_models > info.max_models {
        return Err(Rejection::TooManyModels {
            requested: conf.nb_models,
            max: info.max_models,
        });
    }

    if conf.nb_queue_pairs > info.max_queue_pairs {
        return Err(Rejection::TooManyQueuePairs {
            requested: conf.nb_queue_pairs,
            max: info.max_queue_pairs,
        });
    }

    let decision = configure_transition(state);

    #[cfg(feature = "debug")]
    log::trace!("configure from {}: {:?}", state, decision);

    decision
}

/// State-table half of [`check_configure`]
pub const fn configure_transition(state: DeviceState) -> Result<Transition, Rejection> {
    match state {
        DeviceState::Probed => Ok(Transition::Configure),
        DeviceState::Configured => Ok(Transition::Reconfigure),
        DeviceState::Started => Err(Rejection::Started),
        DeviceState::Closed => Err(Rejection::Closed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(max_models: u16, max_queue_pairs: u16) -> DevInfo {
        DevInfo {
            driver_name: "ml_test",
            max_models,
            max_queue_pairs,
            max_desc: 1024,
            max_segments: 1,
            min_align_size: 128,
        }
    }

    #[test]
    fn test_within_limits_from_configurable_states() {
        let info = info(8, 16);
        let conf = DevConfig::new(8, 16);

        assert_eq!(
            check_configure(DeviceState::Probed, &conf, &info),
            Ok(Transition::Configure)
        );
        assert_eq!(
            check_configure(DeviceState::Configured, &conf, &info),
            Ok(Transition::Reconfigure)
        );
        assert_eq!(Transition::Reconfigure.next_state(), DeviceState::Configured);
    }

    #[test]
    fn test_started_and_closed_rejected() {
        let info = info(8, 16);
        let conf = DevConfig::new(1, 1);

        let started = check_configure(DeviceState::Started, &conf, &info);
        assert_eq!(started, Err(Rejection::Started));
        assert_eq!(started.unwrap_err().error(), MlDevError::NotSupported);

        let closed = check_configure(DeviceState::Closed, &conf, &info);
        assert_eq!(closed, Err(Rejection::Closed));
        assert_eq!(MlDevError::from(closed.unwrap_err()), MlDevError::NotSupported);
    }

    #[test]
    fn test_limits_checked_before_state() {
        let info = info(8, 16);

        for state in DeviceState::ALL {
            let models = check_configure(state, &DevConfig::new(9, 1), &info);
            assert_eq!(
                models,
                Err(Rejection::TooManyModels {
                    requested: 9,
                    max: 8
                })
            );

            let qps = check_configure(state, &DevConfig::new(1, 17), &info);
            assert_eq!(
                qps,
                Err(Rejection::TooManyQueuePairs {
                    requested: 17,
                    max: 16
                })
            );
            assert_eq!(qps.unwrap_err().error(), MlDevError::InvalidArgument);
        }
    }

    #[test]
    fn test_models_checked_before_queue_pairs() {
        let result = check_configure(DeviceState::Probed, &DevConfig::new(9, 17), &info(8, 16));
        assert!(matches!(result, Err(Rejection::TooManyModels { .. })));
    }

    #[test]
    fn test_zero_request_is_valid() {
        let result = check_configure(DeviceState::Probed, &DevConfig::default(), &info(0, 0));
        assert_eq!(result, Ok(Transition::Configure));
    }

    #[test]
    fn test_rejection_messages_name_the_limit() {
        let msg = std::format!(
            "{}",
            Rejection::TooManyModels {
                requested: 9,
                max: 8
            }
        );
        assert!(msg.contains("max_models 8"));

        let msg = std::format!(
            "{}",
            Rejection::TooManyQueuePairs {
                requested: 2,
                max: 1
            }
        );
        assert!(msg.contains("max_queue_pairs 1"));
    }
}
