//! embedded-hal adapters
//!
//! Bridges any HAL that implements the `embedded-hal` 1.0 blocking I2C trait or
//! the `embedded-io` byte stream traits onto the platform interfaces, so a new
//! board only needs its vendor HAL plus a [`Platform`](super::Platform) impl.

mod i2c;
mod uart;

pub use i2c::HalI2c;
pub use uart::IoUart;
