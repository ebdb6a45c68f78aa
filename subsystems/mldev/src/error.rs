//! # ML Device Error Handling
//!
//! Every control operation returns one of three outcomes besides success:
//!
//! | Error | Detected | Device state |
//! |-------|----------|--------------|
//! | [`MlDevError::InvalidArgument`] | before any mutation | unchanged |
//! | [`MlDevError::NotSupported`] | after limit validation | unchanged |
//! | [`MlDevError::Bus`] | during close, from the bus manager | `Closed` |
//!
//! Errors are plain values. Diagnostics go to the log as a side channel and
//! never replace the returned error.

use core::fmt;

use crate::bus::BusError;

// =============================================================================
// RESULT TYPE
// =============================================================================

/// ML device result type alias
pub type MlDevResult<T> = core::result::Result<T, MlDevError>;

// =============================================================================
// ERRNO VALUES
// =============================================================================

/// Invalid argument
pub const EINVAL: i32 = 22;

/// Operation not supported
pub const ENOTSUP: i32 = 95;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// ML device control-plane error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlDevError {
    /// A required reference is absent, or a request exceeds a hardware limit
    InvalidArgument,
    /// The current lifecycle state does not permit the operation
    NotSupported,
    /// Device removal failed on the bus; the code is forwarded untouched
    Bus(BusError),
}

impl MlDevError {
    /// Negative errno value reported to the host dispatch layer
    pub const fn errno(self) -> i32 {
        match self {
            Self::InvalidArgument => -EINVAL,
            Self::NotSupported => -ENOTSUP,
            Self::Bus(e) => e.code(),
        }
    }
}

impl fmt::Display for MlDevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::NotSupported => write!(f, "operation not supported"),
            Self::Bus(e) => write!(f, "bus error: {}", e),
        }
    }
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<BusError> for MlDevError {
    fn from(e: BusError) -> Self {
        MlDevError::Bus(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(MlDevError::InvalidArgument.errno(), -22);
        assert_eq!(MlDevError::NotSupported.errno(), -95);
        assert_eq!(MlDevError::Bus(BusError::new(-5)).errno(), -5);
    }

    #[test]
    fn test_bus_error_conversion() {
        let error: MlDevError = BusError::new(-19).into();
        assert!(matches!(error, MlDevError::Bus(e) if e.code() == -19));
    }

    #[test]
    fn test_error_display() {
        let s = std::format!("{}", MlDevError::Bus(BusError::new(-5)));
        assert!(s.contains("-5"));
        assert_eq!(
            std::format!("{}", MlDevError::NotSupported),
            "operation not supported"
        );
    }
}
