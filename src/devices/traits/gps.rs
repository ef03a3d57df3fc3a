//! GPS facade

use crate::devices::Result;

/// One GPS fix as reported by the receiver
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpsFix {
    /// Fix time in the driver's representation (e.g. UTC hhmmss)
    pub time: u32,
    /// Latitude in degrees (-90 to +90)
    pub latitude: f32,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f32,
    /// Number of satellites used in the fix
    pub satellites_used: u8,
    /// Altitude in meters above mean sea level
    pub altitude: f32,
}

/// GPS receiver
pub trait Gps {
    /// Read the current fix
    ///
    /// All five fields come from a single read; they are never mixed across
    /// receiver updates.
    fn read(&mut self) -> Result<GpsFix>;
}
