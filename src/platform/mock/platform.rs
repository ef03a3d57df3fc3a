//! Mock Platform implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{I2cConfig, Platform, UartConfig},
    Result,
};
use core::sync::atomic::{AtomicU32, Ordering};

use super::{MockI2c, MockTimer, MockUart};
use std::vec::Vec;

/// Number of times the mock reset handler has run (process-wide)
static RESET_COUNT: AtomicU32 = AtomicU32::new(0);

fn mock_reset() {
    RESET_COUNT.fetch_add(1, Ordering::SeqCst);
}

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing.
/// Each UART, I2C bus and the counter can be handed out once, like real
/// peripheral singletons.
#[derive(Debug)]
pub struct MockPlatform {
    uarts_allocated: Vec<u8>,
    i2cs_allocated: Vec<u8>,
    timer_taken: bool,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            uarts_allocated: Vec::new(),
            i2cs_allocated: Vec::new(),
            timer_taken: false,
        }
    }

    /// Maximum number of UART peripherals
    pub const MAX_UARTS: u8 = 4;

    /// Maximum number of I2C peripherals
    pub const MAX_I2CS: u8 = 3;

    /// Total reset handler invocations across all mock platforms
    pub fn reset_count() -> u32 {
        RESET_COUNT.load(Ordering::SeqCst)
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Uart = MockUart;
    type I2c = MockI2c;
    type Timer = MockTimer;

    fn init() -> Result<Self> {
        Ok(Self::new())
    }

    fn system_clock_hz(&self) -> u32 {
        120_000_000 // Simulated 120 MHz system clock
    }

    fn create_uart(&mut self, uart_id: u8, config: UartConfig) -> Result<Self::Uart> {
        if uart_id >= Self::MAX_UARTS || self.uarts_allocated.contains(&uart_id) {
            return Err(PlatformError::ResourceUnavailable);
        }
        if config.baud_rate == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        self.uarts_allocated.push(uart_id);
        Ok(MockUart::new(config))
    }

    fn create_i2c(&mut self, i2c_id: u8, config: I2cConfig) -> Result<Self::I2c> {
        if i2c_id >= Self::MAX_I2CS || self.i2cs_allocated.contains(&i2c_id) {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.i2cs_allocated.push(i2c_id);
        Ok(MockI2c::new(config))
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        if self.timer_taken {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.timer_taken = true;
        Ok(MockTimer::new())
    }

    fn reset_handler(&self) -> fn() {
        mock_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::UartInterface;

    #[test]
    fn test_mock_platform_init() {
        let platform = MockPlatform::init().unwrap();
        assert_eq!(platform.system_clock_hz(), 120_000_000);
    }

    #[test]
    fn test_mock_platform_uart() {
        let mut platform = MockPlatform::new();
        let mut uart0 = platform.create_uart(0, UartConfig::default()).unwrap();
        uart0.write(b"test").unwrap();

        let _uart1 = platform.create_uart(1, UartConfig::default()).unwrap();

        // Same UART cannot be handed out twice
        assert!(platform.create_uart(0, UartConfig::default()).is_err());

        // Invalid UART ID should fail
        assert!(platform.create_uart(10, UartConfig::default()).is_err());
    }

    #[test]
    fn test_mock_platform_rejects_zero_baud() {
        let mut platform = MockPlatform::new();
        let result = platform.create_uart(0, UartConfig::with_baud_rate(0));
        assert!(matches!(result, Err(PlatformError::InvalidConfig)));
    }

    #[test]
    fn test_mock_platform_single_timer() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_timer().is_ok());
        assert!(platform.create_timer().is_err());
    }

    #[test]
    fn test_mock_platform_i2c() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_i2c(2, I2cConfig::default()).is_ok());
        assert!(platform.create_i2c(2, I2cConfig::default()).is_err());
        assert!(platform.create_i2c(3, I2cConfig::default()).is_err());
    }
}
