//! `embedded_hal::i2c::I2c` adapter

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{i2c::check_address, I2cConfig, I2cInterface},
    Result,
};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C bus backed by an `embedded-hal` blocking I2C implementation
///
/// The bus clock is fixed when the HAL peripheral is constructed; `config`
/// records what bring-up asked for.
pub struct HalI2c<T> {
    bus: T,
    config: I2cConfig,
}

impl<T: I2c> HalI2c<T> {
    /// Wrap an initialized HAL I2C peripheral
    pub fn new(bus: T, config: I2cConfig) -> Self {
        Self { bus, config }
    }

    /// Release the underlying HAL peripheral
    pub fn release(self) -> T {
        self.bus
    }
}

fn map_error<E: embedded_hal::i2c::Error>(error: E) -> PlatformError {
    let kind = match error.kind() {
        ErrorKind::NoAcknowledge(_) => I2cError::Nack,
        ErrorKind::ArbitrationLoss => I2cError::ArbitrationLost,
        ErrorKind::Overrun => I2cError::Overrun,
        _ => I2cError::BusError,
    };
    PlatformError::I2c(kind)
}

impl<T: I2c> I2cInterface for HalI2c<T> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        check_address(addr)?;
        self.bus.write(addr, data).map_err(map_error)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.bus.read(addr, buffer).map_err(map_error)
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        check_address(addr)?;
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(map_error)
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency != self.config.frequency {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}
