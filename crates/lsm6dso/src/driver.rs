//! LSM6DSO driver implementation.
//!
//! This module provides a minimal blocking driver for the LSM6DSO.

use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use crate::config::Config;
use crate::config::common::{
    AccelDataRate, AccelRange, FullScaleMode, GyroDataRate, GyroRange,
};
use crate::data::{AccelRaw, AccelReading, DataReadyStatus, ErrorCounters, GyroRaw, GyroReading, RawBlock};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{I2cInterface, Interface, Lsm6dsoAddress, SpiInterface};

/// LSM6DSO 6-axis IMU driver.
///
/// All configuration state lives in the device's registers; the driver
/// itself only carries the bus interface and the lifetime error counters.
pub struct Lsm6dso<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the LSM6DSO driver.
pub type Lsm6dsoI2c<I2C> = Lsm6dso<I2cInterface<I2C>>;
/// SPI type alias for the LSM6DSO driver.
pub type Lsm6dsoSpi<SPI> = Lsm6dso<SpiInterface<SPI>>;

impl<I2C> Lsm6dso<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver at the primary address (0x6A).
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::with_i2c_address(i2c, Lsm6dsoAddress::Primary.addr())
    }

    /// Creates a new I2C-based driver at a custom 7-bit address.
    pub fn with_i2c_address(i2c: I2C, address: u8) -> Self {
        let interface = I2cInterface::new(i2c, address);
        Self {
            core: DeviceCore::new(interface),
        }
    }

    /// Updates the I2C address used by the interface.
    pub fn set_i2c_address(&mut self, address: u8) {
        self.core.set_i2c_address(address);
    }

    /// Attempts initialization for one or more I2C addresses.
    ///
    /// Returns the address that answered with the right chip ID. A wrong
    /// chip ID aborts the probe; bus errors move on to the next address.
    pub fn init_with_addresses(&mut self, config: Config, addresses: &[u8]) -> Result<u8, Error> {
        let mut last_err = None;
        for &address in addresses {
            self.set_i2c_address(address);
            match self.init(config) {
                Ok(()) => return Ok(address),
                Err(Error::WrongDevice) => return Err(Error::WrongDevice),
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or(Error::NotPresent))
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<SPI> Lsm6dso<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver.
    pub fn new_spi(spi: SPI) -> Self {
        let interface = SpiInterface::new(spi);
        Self {
            core: DeviceCore::new(interface),
        }
    }

    /// Releases the SPI bus, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Lsm6dso<I>
where
    I: Interface,
{
    /// Initializes the device: verify WHO_AM_I, enable address
    /// auto-increment, then apply the startup configuration.
    pub fn init(&mut self, config: Config) -> Result<(), Error> {
        self.core.init(config)
    }

    /// Verifies the device WHO_AM_I register.
    pub fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device()
    }

    /// Enables or disables block data update (CTRL3_C.BDU).
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_block_data_update(enable)
    }

    /// Returns whether block data update is enabled.
    pub fn block_data_update(&mut self) -> Result<bool, Error> {
        self.core.block_data_update()
    }

    /// Opens or closes the embedded functions register page.
    ///
    /// While the page is open the ordinary register map is shadowed; close
    /// it before any other driver call.
    pub fn set_embedded_functions(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_embedded_functions(enable)
    }

    /// Returns whether the embedded functions register page is open.
    pub fn embedded_functions(&mut self) -> Result<bool, Error> {
        self.core.embedded_functions()
    }

    /// Selects the accelerometer full-scale decode mode (CTRL8_XL.XL_FS_MODE).
    pub fn set_full_scale_mode(&mut self, mode: FullScaleMode) -> Result<(), Error> {
        self.core.set_full_scale_mode(mode)
    }

    /// Returns the current accelerometer full-scale decode mode.
    pub fn full_scale_mode(&mut self) -> Result<FullScaleMode, Error> {
        self.core.full_scale_mode()
    }

    /// Sets the accelerometer full-scale range, returning the range the
    /// hardware will actually use (16g downgrades to 8g in extended mode).
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<AccelRange, Error> {
        self.core.set_accel_range(range)
    }

    /// Returns the accelerometer range decoded from the registers.
    pub fn accel_range(&mut self) -> Result<AccelRange, Error> {
        self.core.accel_range()
    }

    /// Sets the accelerometer output data rate, returning the rate the
    /// hardware will actually use (1.6 Hz upgrades to 12.5 Hz when
    /// high-performance mode is off).
    pub fn set_accel_data_rate(&mut self, odr: AccelDataRate) -> Result<AccelDataRate, Error> {
        self.core.set_accel_data_rate(odr)
    }

    /// Returns the accelerometer output data rate decoded from the registers.
    pub fn accel_data_rate(&mut self) -> Result<AccelDataRate, Error> {
        self.core.accel_data_rate()
    }

    /// Sets the gyroscope full-scale range.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error> {
        self.core.set_gyro_range(range)
    }

    /// Returns the gyroscope range decoded from the registers.
    pub fn gyro_range(&mut self) -> Result<GyroRange, Error> {
        self.core.gyro_range()
    }

    /// Sets the gyroscope output data rate.
    pub fn set_gyro_data_rate(&mut self, odr: GyroDataRate) -> Result<(), Error> {
        self.core.set_gyro_data_rate(odr)
    }

    /// Returns the gyroscope output data rate decoded from the registers.
    pub fn gyro_data_rate(&mut self) -> Result<GyroDataRate, Error> {
        self.core.gyro_data_rate()
    }

    /// Enables or disables accelerometer high-performance mode.
    pub fn set_accel_high_performance(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_accel_high_performance(enable)
    }

    /// Returns whether accelerometer high-performance mode is on.
    pub fn accel_high_performance(&mut self) -> Result<bool, Error> {
        self.core.accel_high_performance()
    }

    /// Enables or disables gyroscope high-performance mode.
    pub fn set_gyro_high_performance(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_gyro_high_performance(enable)
    }

    /// Returns whether gyroscope high-performance mode is on.
    pub fn gyro_high_performance(&mut self) -> Result<bool, Error> {
        self.core.gyro_high_performance()
    }

    /// Powers the accelerometer up or down. Powering up a sensor that was
    /// down restores the 416 Hz default rate.
    pub fn set_accel_enabled(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_accel_enabled(enable)
    }

    /// Returns whether the accelerometer is powered (ODR not power-down).
    pub fn accel_enabled(&mut self) -> Result<bool, Error> {
        self.core.accel_enabled()
    }

    /// Powers the gyroscope up or down. Powering up a sensor that was down
    /// restores the 416 Hz default rate.
    pub fn set_gyro_enabled(&mut self, enable: bool) -> Result<(), Error> {
        self.core.set_gyro_enabled(enable)
    }

    /// Returns whether the gyroscope is powered (ODR not power-down).
    pub fn gyro_enabled(&mut self) -> Result<bool, Error> {
        self.core.gyro_enabled()
    }

    /// Reads and decodes the STATUS_REG data-ready flags.
    pub fn data_ready(&mut self) -> Result<DataReadyStatus, Error> {
        self.core.data_ready()
    }

    /// Reads raw accelerometer X.
    pub fn read_accel_raw_x(&mut self) -> Result<i16, Error> {
        self.core.read_accel_raw_x()
    }

    /// Reads raw accelerometer Y.
    pub fn read_accel_raw_y(&mut self) -> Result<i16, Error> {
        self.core.read_accel_raw_y()
    }

    /// Reads raw accelerometer Z.
    pub fn read_accel_raw_z(&mut self) -> Result<i16, Error> {
        self.core.read_accel_raw_z()
    }

    /// Reads raw gyroscope X.
    pub fn read_gyro_raw_x(&mut self) -> Result<i16, Error> {
        self.core.read_gyro_raw_x()
    }

    /// Reads raw gyroscope Y.
    pub fn read_gyro_raw_y(&mut self) -> Result<i16, Error> {
        self.core.read_gyro_raw_y()
    }

    /// Reads raw gyroscope Z.
    pub fn read_gyro_raw_z(&mut self) -> Result<i16, Error> {
        self.core.read_gyro_raw_z()
    }

    /// Reads raw accelerometer data (X, Y, Z) in one burst.
    pub fn read_accel_raw(&mut self) -> Result<AccelRaw, Error> {
        self.core.read_accel_raw()
    }

    /// Reads raw gyroscope data (X, Y, Z) in one burst.
    pub fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        self.core.read_gyro_raw()
    }

    /// Reads gyroscope and accelerometer output in one 12-byte burst.
    pub fn read_raw_block(&mut self) -> Result<RawBlock, Error> {
        self.core.read_raw_block()
    }

    /// Reads accelerometer X in g, scaled by the current register state.
    pub fn read_accel_x(&mut self) -> Result<f32, Error> {
        self.core.read_accel_x()
    }

    /// Reads accelerometer Y in g, scaled by the current register state.
    pub fn read_accel_y(&mut self) -> Result<f32, Error> {
        self.core.read_accel_y()
    }

    /// Reads accelerometer Z in g, scaled by the current register state.
    pub fn read_accel_z(&mut self) -> Result<f32, Error> {
        self.core.read_accel_z()
    }

    /// Reads all accelerometer axes in g, scaled by the current register state.
    pub fn read_accel(&mut self) -> Result<AccelReading, Error> {
        self.core.read_accel()
    }

    /// Reads gyroscope X in deg/s, scaled by the current register state.
    pub fn read_gyro_x(&mut self) -> Result<f32, Error> {
        self.core.read_gyro_x()
    }

    /// Reads gyroscope Y in deg/s, scaled by the current register state.
    pub fn read_gyro_y(&mut self) -> Result<f32, Error> {
        self.core.read_gyro_y()
    }

    /// Reads gyroscope Z in deg/s, scaled by the current register state.
    pub fn read_gyro_z(&mut self) -> Result<f32, Error> {
        self.core.read_gyro_z()
    }

    /// Reads all gyroscope axes in deg/s, scaled by the current register state.
    pub fn read_gyro(&mut self) -> Result<GyroReading, Error> {
        self.core.read_gyro()
    }

    /// Returns the lifetime error counters for this driver instance.
    pub fn error_counters(&self) -> ErrorCounters {
        self.core.error_counters()
    }
}
