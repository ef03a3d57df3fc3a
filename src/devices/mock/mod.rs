//! Mock device facades for testing
//!
//! Scripted IMU, GPS, barometer, radio and storage facades. Each mock returns
//! preset values, can be told to fail a specific operation, and counts how
//! often every operation was called so tests can verify ordering and
//! short-circuiting without hardware.
//!
//! Available during test builds and with the `mock` feature.
//!
//! ## Usage
//!
//! ```ignore
//! use telemetry_recorder::devices::mock::{MockBarometer, MockGps, MockImu};
//! use telemetry_recorder::devices::DeviceError;
//!
//! let mut imu = MockImu::new();
//! imu.fail_temperature(Some(DeviceError::NotReady));
//! ```

#![cfg(any(test, feature = "mock"))]

mod barometer;
mod gps;
mod imu;
mod radio;
mod storage;

pub use barometer::{BarometerCalls, MockBarometer};
pub use gps::MockGps;
pub use imu::{ImuCalls, MockImu};
pub use radio::MockRadio;
pub use storage::MockStorage;
