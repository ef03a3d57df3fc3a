//! Mock storage sink

use crate::devices::{traits::Storage, DeviceError, Result};
use std::vec::Vec;

/// Mock storage for testing
///
/// Appends every successful write to an in-memory log.
#[derive(Debug, Default)]
pub struct MockStorage {
    contents: Vec<u8>,
    error: Option<DeviceError>,
    write_calls: u32,
}

impl MockStorage {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Make `write` fail (None restores normal operation)
    pub fn fail(&mut self, error: Option<DeviceError>) {
        self.error = error;
    }

    /// Number of `write` calls
    pub fn write_calls(&self) -> u32 {
        self.write_calls
    }
}

impl Storage for MockStorage {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.write_calls += 1;
        if let Some(e) = self.error {
            return Err(e);
        }
        self.contents.extend_from_slice(data);
        Ok(())
    }
}
