//! Storage facade

use crate::devices::Result;

/// Append-only sink for recorded data (e.g. a log file on a microSD card)
pub trait Storage {
    /// Append `data` to the end of the log
    fn write(&mut self, data: &[u8]) -> Result<()>;
}
