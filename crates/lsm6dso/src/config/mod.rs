//! Configuration helpers for the LSM6DSO.

pub(crate) mod common;

pub use common::{AccelConfig, AccelDataRate, AccelRange, FullScaleMode};
pub use common::{GyroConfig, GyroDataRate, GyroRange};

/// LSM6DSO startup configuration.
///
/// Describes the register state that [`init`](crate::Lsm6dso::init) writes
/// to the device. The driver never keeps this value around; after startup
/// the registers themselves are the only record of the configuration, and
/// every getter decodes them afresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Accelerometer configuration (range + output data rate). None leaves the accelerometer powered down.
    pub accel: Option<AccelConfig>,
    /// Gyroscope configuration (range + output data rate). None leaves the gyroscope powered down.
    pub gyro: Option<GyroConfig>,
    /// Block data update: output registers freeze between the low and high byte reads.
    pub block_data_update: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a default configuration (accel 8g @ 416 Hz, gyro 500 dps @ 416 Hz, BDU on).
    pub const fn new() -> Self {
        Self {
            accel: Some(AccelConfig::DEFAULT),
            gyro: Some(GyroConfig::DEFAULT),
            block_data_update: true,
        }
    }

    /// Sets the accelerometer configuration.
    #[must_use]
    pub const fn with_accel_config(mut self, accel: AccelConfig) -> Self {
        self.accel = Some(accel);
        self
    }

    /// Leaves the accelerometer powered down.
    #[must_use]
    pub const fn without_accel(mut self) -> Self {
        self.accel = None;
        self
    }

    /// Sets the gyroscope configuration.
    #[must_use]
    pub const fn with_gyro_config(mut self, gyro: GyroConfig) -> Self {
        self.gyro = Some(gyro);
        self
    }

    /// Leaves the gyroscope powered down.
    #[must_use]
    pub const fn without_gyro(mut self) -> Self {
        self.gyro = None;
        self
    }

    /// Sets the block data update flag.
    #[must_use]
    pub const fn with_block_data_update(mut self, enabled: bool) -> Self {
        self.block_data_update = enabled;
        self
    }
}
