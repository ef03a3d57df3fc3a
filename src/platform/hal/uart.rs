//! `embedded_io` UART adapter

use crate::platform::{
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
    Result,
};
use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write};

/// UART backed by an `embedded-io` byte stream
///
/// Reads never block: if the HAL reports nothing ready, `read` returns 0.
/// The baud rate is fixed by the HAL constructor.
pub struct IoUart<T> {
    port: T,
    config: UartConfig,
}

impl<T> IoUart<T>
where
    T: Read + Write + ReadReady,
{
    /// Wrap an initialized HAL serial port
    pub fn new(port: T, config: UartConfig) -> Self {
        Self { port, config }
    }

    /// Release the underlying HAL serial port
    pub fn release(self) -> T {
        self.port
    }
}

fn map_error<E: embedded_io::Error>(error: E, fallback: UartError) -> PlatformError {
    let kind = match error.kind() {
        ErrorKind::TimedOut => UartError::Timeout,
        ErrorKind::InvalidData => UartError::FramingError,
        _ => fallback,
    };
    PlatformError::Uart(kind)
}

impl<T> UartInterface for IoUart<T>
where
    T: Read + Write + ReadReady,
{
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if data.is_empty() {
            return Ok(0);
        }
        self.port
            .write(data)
            .map_err(|e| map_error(e, UartError::WriteFailed))
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if buffer.is_empty() {
            return Ok(0);
        }
        let ready = self
            .port
            .read_ready()
            .map_err(|e| map_error(e, UartError::ReadFailed))?;
        if !ready {
            return Ok(0);
        }
        self.port
            .read(buffer)
            .map_err(|e| map_error(e, UartError::ReadFailed))
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        if baud != self.config.baud_rate {
            return Err(PlatformError::Uart(UartError::InvalidBaudRate));
        }
        Ok(())
    }

    fn available(&mut self) -> Result<bool> {
        self.port
            .read_ready()
            .map_err(|e| map_error(e, UartError::ReadFailed))
    }

    fn flush(&mut self) -> Result<()> {
        self.port
            .flush()
            .map_err(|e| map_error(e, UartError::WriteFailed))
    }
}
