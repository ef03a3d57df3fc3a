//! Device facade error type
//!
//! Every sensor, radio and storage facade reports failure through
//! [`DeviceError`]. The recorder never inspects the variant; it passes the
//! value through to its caller unchanged.

use crate::platform::PlatformError;
use core::fmt;

/// Result type for device facade operations
pub type Result<T> = core::result::Result<T, DeviceError>;

/// Peripheral operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Underlying bus or UART failure
    Platform(PlatformError),
    /// Device has no data yet (e.g. GPS without a fix)
    NotReady,
    /// Reading failed validation (stuck value, bad checksum, out of range)
    InvalidData,
    /// Driver used before initialization
    NotInitialized,
    /// Output did not fit the destination buffer
    BufferFull,
}

impl From<PlatformError> for DeviceError {
    fn from(error: PlatformError) -> Self {
        DeviceError::Platform(error)
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Platform(e) => write!(f, "{}", e),
            DeviceError::NotReady => write!(f, "device not ready"),
            DeviceError::InvalidData => write!(f, "invalid data from device"),
            DeviceError::NotInitialized => write!(f, "device not initialized"),
            DeviceError::BufferFull => write!(f, "buffer full"),
        }
    }
}
