//! Radio link facade

use crate::devices::Result;

/// Duplex byte channel to the ground station
///
/// No framing is implied: whatever bytes the link delivered are returned.
pub trait Radio {
    /// Read pending bytes
    ///
    /// The returned slice borrows the radio's receive buffer and is valid
    /// until the next call on the radio. An empty slice means nothing arrived.
    fn read(&mut self) -> Result<&[u8]>;

    /// Write all of `data` to the link
    fn write(&mut self, data: &[u8]) -> Result<()>;
}
