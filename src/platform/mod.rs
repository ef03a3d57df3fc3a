//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the flight recorder board.
//! All platform-specific code must be isolated to this module; the recorder
//! and the device facades only see the traits re-exported here.

pub mod config;
pub mod error;
pub mod hal;
pub mod hardware_map;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use config::BoardConfig;
pub use error::{PlatformError, Result};
pub use hardware_map::{initialize_platform, HardwareMap};
pub use traits::{I2cInterface, Platform, TimerInterface, UartInterface};
