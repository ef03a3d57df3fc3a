//! IMU facade
//!
//! Device-independent interface the recorder reads the inertial sensor through.
//! One blocking read per physical quantity; the driver owns unit conversion
//! and calibration.
//!
//! ## Usage
//!
//! ```ignore
//! use telemetry_recorder::devices::traits::Imu;
//!
//! fn sample<I: Imu>(imu: &mut I) -> telemetry_recorder::devices::Result<f32> {
//!     let accel = imu.read_acceleration()?;
//!     Ok(accel.norm())
//! }
//! ```

use crate::devices::Result;
use nalgebra::Vector3;

/// Inertial measurement unit
///
/// Axes follow the driver's body frame convention.
pub trait Imu {
    /// Read acceleration (m/s², includes gravity)
    fn read_acceleration(&mut self) -> Result<Vector3<f32>>;

    /// Read angular rate (rad/s or °/s per driver convention)
    fn read_angular_rate(&mut self) -> Result<Vector3<f32>>;

    /// Read die temperature (°C)
    fn read_temperature(&mut self) -> Result<f32>;
}
