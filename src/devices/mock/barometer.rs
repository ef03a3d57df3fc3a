//! Mock barometer

use crate::devices::{traits::Barometer, DeviceError, Result};

/// Per-operation call counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BarometerCalls {
    pub temperature: u32,
    pub pressure: u32,
    pub altitude: u32,
}

/// Mock barometer for testing
#[derive(Debug, Clone)]
pub struct MockBarometer {
    temperature: f32,
    pressure: f32,
    altitude: f32,
    temperature_error: Option<DeviceError>,
    pressure_error: Option<DeviceError>,
    altitude_error: Option<DeviceError>,
    calls: BarometerCalls,
}

impl Default for MockBarometer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBarometer {
    /// Standard atmosphere at sea level
    pub fn new() -> Self {
        Self::with_values(15.0, 101_325.0, 0.0)
    }

    /// Create a mock returning the given values
    pub fn with_values(temperature: f32, pressure: f32, altitude: f32) -> Self {
        Self {
            temperature,
            pressure,
            altitude,
            temperature_error: None,
            pressure_error: None,
            altitude_error: None,
            calls: BarometerCalls::default(),
        }
    }

    /// Change the values returned by subsequent reads
    pub fn set_values(&mut self, temperature: f32, pressure: f32, altitude: f32) {
        self.temperature = temperature;
        self.pressure = pressure;
        self.altitude = altitude;
    }

    /// Make `read_temperature` fail (None restores normal operation)
    pub fn fail_temperature(&mut self, error: Option<DeviceError>) {
        self.temperature_error = error;
    }

    /// Make `read_pressure` fail
    pub fn fail_pressure(&mut self, error: Option<DeviceError>) {
        self.pressure_error = error;
    }

    /// Make `read_altitude` fail
    pub fn fail_altitude(&mut self, error: Option<DeviceError>) {
        self.altitude_error = error;
    }

    /// Call counters
    pub fn calls(&self) -> BarometerCalls {
        self.calls
    }
}

impl Barometer for MockBarometer {
    fn read_temperature(&mut self) -> Result<f32> {
        self.calls.temperature += 1;
        self.temperature_error.map_or(Ok(self.temperature), Err)
    }

    fn read_pressure(&mut self) -> Result<f32> {
        self.calls.pressure += 1;
        self.pressure_error.map_or(Ok(self.pressure), Err)
    }

    fn read_altitude(&mut self) -> Result<f32> {
        self.calls.altitude += 1;
        self.altitude_error.map_or(Ok(self.altitude), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_barometer_values_and_counts() {
        let mut baro = MockBarometer::with_values(24.5, 101_325.0, 9.8);
        assert_eq!(baro.read_temperature().unwrap(), 24.5);
        assert_eq!(baro.read_pressure().unwrap(), 101_325.0);
        assert_eq!(baro.read_altitude().unwrap(), 9.8);

        baro.fail_pressure(Some(DeviceError::NotReady));
        assert_eq!(baro.read_pressure(), Err(DeviceError::NotReady));
        assert_eq!(
            baro.calls(),
            BarometerCalls {
                temperature: 1,
                pressure: 2,
                altitude: 1
            }
        );
    }
}
