//! Record failure reporting

use crate::devices::DeviceError;
use core::fmt;

/// One blocking read in the record sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordStep {
    ImuAcceleration,
    ImuAngularRate,
    ImuTemperature,
    Gps,
    BarometerTemperature,
    BarometerPressure,
    BarometerAltitude,
}

impl RecordStep {
    /// Every step, in the order `record()` performs them
    pub const ALL: [RecordStep; 7] = [
        RecordStep::ImuAcceleration,
        RecordStep::ImuAngularRate,
        RecordStep::ImuTemperature,
        RecordStep::Gps,
        RecordStep::BarometerTemperature,
        RecordStep::BarometerPressure,
        RecordStep::BarometerAltitude,
    ];

    /// Zero-based position in the sequence
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            RecordStep::ImuAcceleration => "imu acceleration",
            RecordStep::ImuAngularRate => "imu angular rate",
            RecordStep::ImuTemperature => "imu temperature",
            RecordStep::Gps => "gps fix",
            RecordStep::BarometerTemperature => "barometer temperature",
            RecordStep::BarometerPressure => "barometer pressure",
            RecordStep::BarometerAltitude => "barometer altitude",
        }
    }
}

/// `record()` stopped at `step` because the facade returned `cause`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RecordError {
    pub step: RecordStep,
    pub cause: DeviceError,
}

impl RecordError {
    /// Adapter for `map_err` that tags a facade error with its step
    pub(crate) fn at(step: RecordStep) -> impl FnOnce(DeviceError) -> RecordError {
        move |cause| RecordError { step, cause }
    }
}

impl From<RecordError> for DeviceError {
    fn from(error: RecordError) -> Self {
        error.cause
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.step.name(), self.cause)
    }
}
