//! Mock IMU

use crate::devices::{traits::Imu, DeviceError, Result};
use nalgebra::Vector3;

/// Per-operation call counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImuCalls {
    pub acceleration: u32,
    pub angular_rate: u32,
    pub temperature: u32,
}

/// Mock IMU for testing
///
/// Returns fixed values until changed. Counters advance on every call,
/// including calls that fail.
#[derive(Debug, Clone)]
pub struct MockImu {
    acceleration: Vector3<f32>,
    angular_rate: Vector3<f32>,
    temperature: f32,
    acceleration_error: Option<DeviceError>,
    angular_rate_error: Option<DeviceError>,
    temperature_error: Option<DeviceError>,
    calls: ImuCalls,
}

impl Default for MockImu {
    fn default() -> Self {
        Self::new()
    }
}

impl MockImu {
    /// Level and at rest: 1g down, no rotation, 25 °C
    pub fn new() -> Self {
        Self::with_values(Vector3::new(0.0, 0.0, 9.80665), Vector3::zeros(), 25.0)
    }

    /// Create a mock returning the given values
    pub fn with_values(
        acceleration: Vector3<f32>,
        angular_rate: Vector3<f32>,
        temperature: f32,
    ) -> Self {
        Self {
            acceleration,
            angular_rate,
            temperature,
            acceleration_error: None,
            angular_rate_error: None,
            temperature_error: None,
            calls: ImuCalls::default(),
        }
    }

    /// Change the values returned by subsequent reads
    pub fn set_values(
        &mut self,
        acceleration: Vector3<f32>,
        angular_rate: Vector3<f32>,
        temperature: f32,
    ) {
        self.acceleration = acceleration;
        self.angular_rate = angular_rate;
        self.temperature = temperature;
    }

    /// Make `read_acceleration` fail (None restores normal operation)
    pub fn fail_acceleration(&mut self, error: Option<DeviceError>) {
        self.acceleration_error = error;
    }

    /// Make `read_angular_rate` fail
    pub fn fail_angular_rate(&mut self, error: Option<DeviceError>) {
        self.angular_rate_error = error;
    }

    /// Make `read_temperature` fail
    pub fn fail_temperature(&mut self, error: Option<DeviceError>) {
        self.temperature_error = error;
    }

    /// Call counters
    pub fn calls(&self) -> ImuCalls {
        self.calls
    }
}

impl Imu for MockImu {
    fn read_acceleration(&mut self) -> Result<Vector3<f32>> {
        self.calls.acceleration += 1;
        match self.acceleration_error {
            Some(e) => Err(e),
            None => Ok(self.acceleration),
        }
    }

    fn read_angular_rate(&mut self) -> Result<Vector3<f32>> {
        self.calls.angular_rate += 1;
        match self.angular_rate_error {
            Some(e) => Err(e),
            None => Ok(self.angular_rate),
        }
    }

    fn read_temperature(&mut self) -> Result<f32> {
        self.calls.temperature += 1;
        match self.temperature_error {
            Some(e) => Err(e),
            None => Ok(self.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_imu_default_at_rest() {
        let mut imu = MockImu::new();
        let accel = imu.read_acceleration().unwrap();
        assert!((accel.z - 9.80665).abs() < 1e-6);
        assert_eq!(imu.read_angular_rate().unwrap(), Vector3::zeros());
        assert_eq!(imu.read_temperature().unwrap(), 25.0);
    }

    #[test]
    fn test_mock_imu_counts_failed_calls() {
        let mut imu = MockImu::new();
        imu.fail_angular_rate(Some(DeviceError::InvalidData));

        assert!(imu.read_acceleration().is_ok());
        assert_eq!(imu.read_angular_rate(), Err(DeviceError::InvalidData));
        assert_eq!(
            imu.calls(),
            ImuCalls {
                acceleration: 1,
                angular_rate: 1,
                temperature: 0
            }
        );

        imu.fail_angular_rate(None);
        assert!(imu.read_angular_rate().is_ok());
    }
}
