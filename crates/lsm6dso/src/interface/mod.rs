//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod spi;

pub use address::Lsm6dsoAddress;
pub use i2c::I2cInterface;
pub use spi::SpiInterface;

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal blocking register I/O for the device core.
pub trait Interface: sealed::Sealed {
    /// Reads a single register.
    fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Reads a contiguous block of registers into `buffer`.
    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single register.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
    /// Writes a contiguous block of registers from `data`.
    fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error>;
}
