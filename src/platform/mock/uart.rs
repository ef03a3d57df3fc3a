//! Mock UART implementation for testing

use crate::platform::{
    error::{PlatformError, UartError},
    traits::{UartConfig, UartInterface},
    Result,
};
use std::vec::Vec;

/// Mock UART implementation
///
/// Provides in-memory buffers for transmit and receive data,
/// allowing unit tests to verify UART operations without hardware.
///
/// # Example
///
/// ```ignore
/// use telemetry_recorder::platform::mock::MockUart;
/// use telemetry_recorder::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
///
/// uart.write(b"Hello").unwrap();
/// assert_eq!(uart.tx_buffer(), b"Hello");
///
/// uart.inject_rx_data(b"World");
/// let mut buf = [0u8; 5];
/// uart.read(&mut buf).unwrap();
/// assert_eq!(&buf, b"World");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8>,
    rx_buffer: Vec<u8>,
    /// Maximum bytes accepted per write (None = unlimited)
    write_limit: Option<usize>,
    fail_writes: bool,
    fail_reads: bool,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            rx_buffer: Vec::new(),
            write_limit: None,
            fail_writes: false,
            fail_reads: false,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.clone()
    }

    /// Inject receive data (for test setup)
    pub fn inject_rx_data(&mut self, data: &[u8]) {
        self.rx_buffer.extend_from_slice(data);
    }

    /// Accept at most `limit` bytes per write, simulating a full TX FIFO
    pub fn set_write_limit(&mut self, limit: Option<usize>) {
        self.write_limit = limit;
    }

    /// Make every write fail with `UartError::WriteFailed`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make every read fail with `UartError::ReadFailed`
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(PlatformError::Uart(UartError::WriteFailed));
        }
        let accepted = self.write_limit.map_or(data.len(), |l| l.min(data.len()));
        self.tx_buffer.extend_from_slice(&data[..accepted]);
        Ok(accepted)
    }

    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if self.fail_reads {
            return Err(PlatformError::Uart(UartError::ReadFailed));
        }
        let to_read = core::cmp::min(buffer.len(), self.rx_buffer.len());

        buffer[..to_read].copy_from_slice(&self.rx_buffer[..to_read]);
        self.rx_buffer.drain(..to_read);

        Ok(to_read)
    }

    fn set_baud_rate(&mut self, baud: u32) -> Result<()> {
        if baud == 0 {
            return Err(PlatformError::Uart(UartError::InvalidBaudRate));
        }
        self.config.baud_rate = baud;
        Ok(())
    }

    fn available(&mut self) -> Result<bool> {
        if self.fail_reads {
            return Err(PlatformError::Uart(UartError::ReadFailed));
        }
        Ok(!self.rx_buffer.is_empty())
    }

    fn flush(&mut self) -> Result<()> {
        // Mock implementation - nothing to flush
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_uart_write() {
        let mut uart = MockUart::new(UartConfig::default());
        let written = uart.write(b"Hello, World!").unwrap();
        assert_eq!(written, 13);
        assert_eq!(uart.tx_buffer(), b"Hello, World!");
    }

    #[test]
    fn test_mock_uart_read() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.inject_rx_data(b"Test Data");

        let mut buffer = [0u8; 4];
        let read = uart.read(&mut buffer).unwrap();
        assert_eq!(read, 4);
        assert_eq!(&buffer, b"Test");

        // Read remaining data
        let mut buffer2 = [0u8; 10];
        let read2 = uart.read(&mut buffer2).unwrap();
        assert_eq!(read2, 5);
        assert_eq!(&buffer2[..5], b" Data");
    }

    #[test]
    fn test_mock_uart_available() {
        let mut uart = MockUart::new(UartConfig::default());
        assert!(!uart.available().unwrap());

        uart.inject_rx_data(b"X");
        assert!(uart.available().unwrap());

        let mut buf = [0u8; 1];
        uart.read(&mut buf).unwrap();
        assert!(!uart.available().unwrap());
    }

    #[test]
    fn test_mock_uart_write_limit() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.set_write_limit(Some(3));
        assert_eq!(uart.write(b"abcdef").unwrap(), 3);
        assert_eq!(uart.tx_buffer(), b"abc");
    }

    #[test]
    fn test_mock_uart_injected_failures() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.set_fail_writes(true);
        uart.set_fail_reads(true);

        assert_eq!(
            uart.write(b"x"),
            Err(PlatformError::Uart(UartError::WriteFailed))
        );
        let mut buf = [0u8; 1];
        assert_eq!(
            uart.read(&mut buf),
            Err(PlatformError::Uart(UartError::ReadFailed))
        );
        assert!(uart.tx_buffer().is_empty());
    }

    #[test]
    fn test_mock_uart_baud_rate() {
        let mut uart = MockUart::new(UartConfig::default());
        assert_eq!(uart.baud_rate(), 115200);

        uart.set_baud_rate(38400).unwrap();
        assert_eq!(uart.baud_rate(), 38400);

        assert!(uart.set_baud_rate(0).is_err());
    }
}
