//! Telemetry snapshot

use crate::devices::traits::GpsFix;
use nalgebra::Vector3;

/// One aggregated reading from every sensor
///
/// Plain value type: the recorder keeps one slot and hands out copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    /// IMU acceleration (m/s²)
    pub acceleration: Vector3<f32>,
    /// IMU angular rate
    pub angular_rate: Vector3<f32>,
    /// IMU die temperature (°C)
    pub imu_temperature: f32,
    /// GPS fix time
    pub gps_time: u32,
    /// GPS latitude (degrees)
    pub gps_latitude: f32,
    /// GPS longitude (degrees)
    pub gps_longitude: f32,
    /// Satellites used in the fix
    pub gps_satellites: u8,
    /// GPS altitude (m MSL)
    pub gps_altitude: f32,
    /// Barometer temperature (°C)
    pub baro_temperature: f32,
    /// Barometric pressure (Pa)
    pub baro_pressure: f32,
    /// Pressure altitude (m)
    pub baro_altitude: f32,
}

impl Default for TelemetryData {
    fn default() -> Self {
        Self {
            acceleration: Vector3::zeros(),
            angular_rate: Vector3::zeros(),
            imu_temperature: 0.0,
            gps_time: 0,
            gps_latitude: 0.0,
            gps_longitude: 0.0,
            gps_satellites: 0,
            gps_altitude: 0.0,
            baro_temperature: 0.0,
            baro_pressure: 0.0,
            baro_altitude: 0.0,
        }
    }
}

impl TelemetryData {
    /// GPS fields as a fix
    pub fn gps_fix(&self) -> GpsFix {
        GpsFix {
            time: self.gps_time,
            latitude: self.gps_latitude,
            longitude: self.gps_longitude,
            satellites_used: self.gps_satellites,
            altitude: self.gps_altitude,
        }
    }

    /// Overwrite the GPS fields from one fix
    pub(crate) fn set_gps_fix(&mut self, fix: &GpsFix) {
        self.gps_time = fix.time;
        self.gps_latitude = fix.latitude;
        self.gps_longitude = fix.longitude;
        self.gps_satellites = fix.satellites_used;
        self.gps_altitude = fix.altitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let data = TelemetryData::default();
        assert_eq!(data.acceleration, Vector3::zeros());
        assert_eq!(data.angular_rate, Vector3::zeros());
        assert_eq!(data.gps_time, 0);
        assert_eq!(data.gps_satellites, 0);
        assert_eq!(data.baro_pressure, 0.0);
    }

    #[test]
    fn test_gps_fix_roundtrip_through_fields() {
        let fix = GpsFix {
            time: 1000,
            latitude: 37.0,
            longitude: -122.0,
            satellites_used: 8,
            altitude: 10.0,
        };
        let mut data = TelemetryData::default();
        data.set_gps_fix(&fix);
        assert_eq!(data.gps_fix(), fix);
        assert_eq!(data.imu_temperature, 0.0);
    }
}
