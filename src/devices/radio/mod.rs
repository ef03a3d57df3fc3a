//! Radio link drivers
//!
//! - `xbee`: XBee module in transparent mode on a UART

pub mod xbee;

pub use xbee::XbeeRadio;
