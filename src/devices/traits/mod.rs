//! Device traits
//!
//! Hardware-independent facades the telemetry recorder reads and writes
//! through. These traits enable:
//! - Unit testing with mock implementations
//! - Swapping sensor parts without touching the recorder
//!
//! All operations are blocking and report failure as
//! [`DeviceError`](crate::devices::DeviceError).

pub mod barometer;
pub mod gps;
pub mod imu;
pub mod radio;
pub mod storage;

pub use barometer::Barometer;
pub use gps::{Gps, GpsFix};
pub use imu::Imu;
pub use radio::Radio;
pub use storage::Storage;
