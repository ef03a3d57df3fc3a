//! Mock radio link

use crate::devices::{traits::Radio, DeviceError, Result};
use std::collections::VecDeque;
use std::vec::Vec;

/// Mock radio for testing
///
/// Each queued packet is returned by exactly one `read`; with nothing queued
/// `read` returns an empty slice. Every successful `write` is kept as one
/// entry in `sent()`.
#[derive(Debug, Default)]
pub struct MockRadio {
    incoming: VecDeque<Vec<u8>>,
    current: Vec<u8>,
    sent: Vec<Vec<u8>>,
    read_error: Option<DeviceError>,
    write_error: Option<DeviceError>,
    read_calls: u32,
    write_calls: u32,
}

impl MockRadio {
    /// Create an idle radio
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes to be returned by a future `read`
    pub fn inject_packet(&mut self, data: &[u8]) {
        self.incoming.push_back(data.to_vec());
    }

    /// Payloads written so far
    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    /// Make `read` fail (None restores normal operation)
    pub fn fail_reads(&mut self, error: Option<DeviceError>) {
        self.read_error = error;
    }

    /// Make `write` fail
    pub fn fail_writes(&mut self, error: Option<DeviceError>) {
        self.write_error = error;
    }

    /// Number of `read` calls
    pub fn read_calls(&self) -> u32 {
        self.read_calls
    }

    /// Number of `write` calls
    pub fn write_calls(&self) -> u32 {
        self.write_calls
    }
}

impl Radio for MockRadio {
    fn read(&mut self) -> Result<&[u8]> {
        self.read_calls += 1;
        if let Some(e) = self.read_error {
            return Err(e);
        }
        self.current = self.incoming.pop_front().unwrap_or_default();
        Ok(&self.current)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.write_calls += 1;
        if let Some(e) = self.write_error {
            return Err(e);
        }
        self.sent.push(data.to_vec());
        Ok(())
    }
}
