//! Hardware map produced by platform bring-up
//!
//! Bring-up runs once: it creates every peripheral the application needs and
//! hands them over in a [`HardwareMap`]. Sensor drivers are then built on top
//! of `i2c`, the radio facade on top of `radio`, and the telemetry recorder
//! borrows those for the rest of the device's operating lifetime.

use crate::platform::{config::BoardConfig, traits::Platform, Result};

/// Peripherals handed from bring-up to the application layer
pub struct HardwareMap<P: Platform> {
    /// Console / debug UART
    pub console: P::Uart,
    /// UART carrying the radio link
    pub radio: P::Uart,
    /// Monotonic hardware counter
    pub counter: P::Timer,
    /// Sensor I2C bus
    pub i2c: P::I2c,
    /// Resets the processor
    pub reset: fn(),
}

/// Create all peripherals listed in `config`
///
/// # Errors
///
/// Returns the first peripheral creation failure; peripherals created before
/// the failure are dropped.
pub fn initialize_platform<P: Platform>(
    platform: &mut P,
    config: &BoardConfig,
) -> Result<HardwareMap<P>> {
    crate::log_info!(
        "Platform bring-up: system clock {} Hz",
        platform.system_clock_hz()
    );

    let counter = platform.create_timer()?;

    let console = platform.create_uart(config.console_uart_id, config.console_uart)?;
    crate::log_debug!(
        "Console on UART{} @ {} baud",
        config.console_uart_id,
        config.console_uart.baud_rate
    );

    let radio = platform.create_uart(config.radio_uart_id, config.radio_uart)?;
    crate::log_debug!(
        "Radio on UART{} @ {} baud",
        config.radio_uart_id,
        config.radio_uart.baud_rate
    );

    let i2c = platform.create_i2c(config.sensor_i2c_id, config.sensor_i2c)?;
    crate::log_debug!(
        "Sensor bus on I2C{} @ {} Hz",
        config.sensor_i2c_id,
        config.sensor_i2c.frequency
    );

    Ok(HardwareMap {
        console,
        radio,
        counter,
        i2c,
        reset: platform.reset_handler(),
    })
}
