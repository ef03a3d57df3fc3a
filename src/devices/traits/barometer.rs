//! Barometer facade

use crate::devices::Result;

/// Barometric pressure sensor
///
/// Altitude is derived by the driver from pressure and its configured
/// sea-level reference.
pub trait Barometer {
    /// Read temperature (°C)
    fn read_temperature(&mut self) -> Result<f32>;

    /// Read pressure (Pa)
    fn read_pressure(&mut self) -> Result<f32>;

    /// Read pressure altitude (m)
    fn read_altitude(&mut self) -> Result<f32>;
}
