//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates the peripheral
//! interfaces the flight recorder needs at bring-up.

use super::{I2cConfig, I2cInterface, TimerInterface, UartConfig, UartInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations must provide concrete types for each peripheral interface
/// via associated types, enabling zero-cost abstractions through compile-time dispatch.
///
/// Bring-up runs once per power cycle: `init` configures clocks, then the
/// `create_*` methods hand out each peripheral exactly once.
///
/// # Example
///
/// ```ignore
/// impl Platform for Lpc40Platform {
///     type Uart = Lpc40Uart;
///     type I2c = Lpc40I2c;
///     type Timer = DwtCounter;
///
///     fn init() -> Result<Self> {
///         // Set the MCU to the maximum clock speed
///         Ok(Self { /* ... */ })
///     }
///
///     // ... other methods
/// }
/// ```
pub trait Platform: Sized {
    /// UART peripheral type
    type Uart: UartInterface;

    /// I2C peripheral type
    type I2c: I2cInterface;

    /// Monotonic counter type
    type Timer: TimerInterface;

    /// Initialize the platform
    ///
    /// Performs clock configuration and any processor setup that must happen
    /// before peripherals are created.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Get system clock frequency in Hz
    fn system_clock_hz(&self) -> u32;

    /// Create a UART peripheral instance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the UART is already in use
    /// or the UART ID is invalid.
    fn create_uart(&mut self, uart_id: u8, config: UartConfig) -> Result<Self::Uart>;

    /// Create an I2C peripheral instance
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the I2C bus is already in use
    /// or the I2C ID is invalid.
    fn create_i2c(&mut self, i2c_id: u8, config: I2cConfig) -> Result<Self::I2c>;

    /// Create the monotonic hardware counter
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the counter was already handed out.
    fn create_timer(&mut self) -> Result<Self::Timer>;

    /// Reset callback handed to the application
    ///
    /// Invoked by the application when it decides the device must restart.
    fn reset_handler(&self) -> fn();
}
