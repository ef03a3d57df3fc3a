//! XBee radio in transparent mode
//!
//! In transparent (AT) mode the module forwards raw UART bytes over the air,
//! so the radio facade is a thin layer over the UART: no API frames, no
//! escaping, no addressing.
//!
//! # Example
//!
//! ```ignore
//! use telemetry_recorder::devices::radio::XbeeRadio;
//! use telemetry_recorder::devices::traits::Radio;
//!
//! let mut radio: XbeeRadio<_, 64> = XbeeRadio::new(hw.radio);
//! radio.write(b"hello ground\r\n")?;
//! let reply = radio.read()?;
//! ```

use crate::devices::{traits::Radio, DeviceError, Result};
use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
};
use heapless::Vec;

/// Bytes moved per UART read call
const CHUNK_SIZE: usize = 32;

/// XBee radio facade over a UART
///
/// `N` is the receive buffer size; one `read` returns at most `N` bytes.
///
/// A UART failure after some bytes were already drained does not discard
/// them: that `read` returns the bytes and the next `read` returns the error.
pub struct XbeeRadio<U: UartInterface, const N: usize> {
    uart: U,
    rx: Vec<u8, N>,
    deferred_error: Option<PlatformError>,
}

impl<U: UartInterface, const N: usize> XbeeRadio<U, N> {
    /// Create a radio on an already configured UART
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            rx: Vec::new(),
            deferred_error: None,
        }
    }

    /// Get mutable reference to the UART (module configuration, tests)
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Release the UART
    pub fn release(self) -> U {
        self.uart
    }
}

impl<U: UartInterface, const N: usize> Radio for XbeeRadio<U, N> {
    fn read(&mut self) -> Result<&[u8]> {
        self.rx.clear();
        if let Some(error) = self.deferred_error.take() {
            return Err(error.into());
        }

        let mut chunk = [0u8; CHUNK_SIZE];
        while !self.rx.is_full() {
            let room = core::cmp::min(N - self.rx.len(), CHUNK_SIZE);
            let n = match self.uart.read(&mut chunk[..room]) {
                Ok(n) => n,
                Err(e) if !self.rx.is_empty() => {
                    self.deferred_error = Some(e);
                    break;
                }
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                break;
            }
            self.rx
                .extend_from_slice(&chunk[..n])
                .map_err(|_| DeviceError::BufferFull)?;
        }

        Ok(&self.rx)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut offset = 0;
        while offset < data.len() {
            let n = self.uart.write(&data[offset..])?;
            if n == 0 {
                return Err(PlatformError::Uart(UartError::WriteFailed).into());
            }
            offset += n;
        }
        self.uart.flush()?;
        Ok(())
    }
}
