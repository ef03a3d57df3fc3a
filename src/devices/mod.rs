//! Device facades
//!
//! Hardware-independent interfaces for the recorder's peripherals, plus the
//! drivers that sit on top of the platform layer.
//!
//! ## Modules
//!
//! - `error`: [`DeviceError`] shared by every facade
//! - `radio`: XBee radio over a UART
//! - `traits`: IMU, GPS, barometer, radio and storage facades
//! - `mock`: scripted facades for tests (test builds and `mock` feature)

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod radio;
pub mod traits;

pub use error::{DeviceError, Result};
