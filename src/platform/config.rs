//! Board bring-up configuration
//!
//! Peripheral assignments and bus settings used by [`initialize_platform`].
//! Baud rates and the sensor bus clock come from `build.rs`, which forwards
//! `CONSOLE_BAUD_RATE`, `RADIO_BAUD_RATE` and `SENSOR_I2C_FREQUENCY` from the
//! build environment (or their defaults).
//!
//! [`initialize_platform`]: crate::platform::initialize_platform

use crate::platform::traits::{I2cConfig, UartConfig};

/// Console baud rate (from build-time environment variable)
pub const CONSOLE_BAUD_RATE: u32 = const_parse_u32(env!("CONSOLE_BAUD_RATE"), 115_200);

/// Radio UART baud rate (from build-time environment variable)
pub const RADIO_BAUD_RATE: u32 = const_parse_u32(env!("RADIO_BAUD_RATE"), 38_400);

/// Sensor I2C clock in Hz (from build-time environment variable)
pub const SENSOR_I2C_FREQUENCY: u32 = const_parse_u32(env!("SENSOR_I2C_FREQUENCY"), 100_000);

/// Parse a decimal u32 at compile time
///
/// Returns `fallback` for empty input, non-digit characters or overflow.
pub const fn const_parse_u32(s: &str, fallback: u32) -> u32 {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return fallback;
    }

    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] < b'0' || bytes[i] > b'9' {
            return fallback;
        }
        value = value * 10 + (bytes[i] - b'0') as u64;
        if value > u32::MAX as u64 {
            return fallback;
        }
        i += 1;
    }

    value as u32
}

/// Peripheral assignment for the flight recorder board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// UART used for console / debug logging
    pub console_uart_id: u8,
    /// Console UART settings
    pub console_uart: UartConfig,
    /// UART wired to the radio module
    pub radio_uart_id: u8,
    /// Radio UART settings
    pub radio_uart: UartConfig,
    /// I2C bus the sensors are attached to
    pub sensor_i2c_id: u8,
    /// Sensor bus settings
    pub sensor_i2c: I2cConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            console_uart_id: 0,
            console_uart: UartConfig::with_baud_rate(CONSOLE_BAUD_RATE),
            radio_uart_id: 1,
            radio_uart: UartConfig::with_baud_rate(RADIO_BAUD_RATE),
            sensor_i2c_id: 2,
            sensor_i2c: I2cConfig {
                frequency: SENSOR_I2C_FREQUENCY,
                ..I2cConfig::default()
            },
        }
    }
}
