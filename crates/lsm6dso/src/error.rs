//! Error type for the LSM6DSO driver.

/// Error type for LSM6DSO operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// Sensor not responding or not present.
    NotPresent,
    /// Invalid chip ID or wrong device.
    WrongDevice,
    /// A register holds a bit pattern with no defined decoding.
    InvalidData,
}
