//! Telemetry line formatting
//!
//! One snapshot becomes one CSV line, fields in record order:
//!
//! ```text
//! ax,ay,az,gx,gy,gz,imu_temp,gps_time,lat,lon,sats,gps_alt,baro_temp,pressure,baro_alt\r\n
//! ```

use super::data::TelemetryData;
use crate::devices::DeviceError;
use core::fmt::Write;
use heapless::String;

/// Longest `f32` Display output: a negative subnormal such as `-1.1754942e-38`
/// prints as `-0.` followed by 45 digits; `f32::MAX` needs 39 digits.
const F32_FIELD_MAX: usize = 50;

/// Line capacity that fits any snapshot: twelve floats, the GPS time, the
/// satellite count, fourteen separators and `\r\n`
pub const TELEMETRY_LINE_CAPACITY: usize = 12 * F32_FIELD_MAX + 10 + 3 + 14 + 2;

/// Format `data` as one CSV line terminated by `\r\n`
///
/// Returns [`DeviceError::BufferFull`] if the line does not fit in `N` bytes.
pub fn format_telemetry<const N: usize>(data: &TelemetryData) -> Result<String<N>, DeviceError> {
    let mut s = String::new();
    write!(
        s,
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}\r\n",
        data.acceleration.x,
        data.acceleration.y,
        data.acceleration.z,
        data.angular_rate.x,
        data.angular_rate.y,
        data.angular_rate.z,
        data.imu_temperature,
        data.gps_time,
        data.gps_latitude,
        data.gps_longitude,
        data.gps_satellites,
        data.gps_altitude,
        data.baro_temperature,
        data.baro_pressure,
        data.baro_altitude,
    )
    .map_err(|_| DeviceError::BufferFull)?;
    Ok(s)
}
