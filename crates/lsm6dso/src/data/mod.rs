//! Sensor data readout helpers.

pub(crate) mod scale;

pub use scale::{accel_mg_per_lsb, gyro_mdps_per_lsb};

use crate::register::{Register, status_reg};

pub(crate) const RAW_BLOCK_START: Register = Register::OutxLG;
pub(crate) const RAW_BLOCK_LEN: usize = 12;
pub(crate) const RAW_BLOCK_GYRO_OFFSET: usize = 0;
pub(crate) const RAW_BLOCK_ACCEL_OFFSET: usize = 6;

/// Raw accelerometer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl AccelRaw {
    pub(crate) fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Raw gyroscope sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroRaw {
    /// X-axis raw count.
    pub x: i16,
    /// Y-axis raw count.
    pub y: i16,
    /// Z-axis raw count.
    pub z: i16,
}

impl GyroRaw {
    pub(crate) fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Accelerometer sample scaled to g.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelReading {
    /// X-axis acceleration in g.
    pub x: f32,
    /// Y-axis acceleration in g.
    pub y: f32,
    /// Z-axis acceleration in g.
    pub z: f32,
}

/// Gyroscope sample scaled to deg/s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroReading {
    /// X-axis angular rate in deg/s.
    pub x: f32,
    /// Y-axis angular rate in deg/s.
    pub y: f32,
    /// Z-axis angular rate in deg/s.
    pub z: f32,
}

/// Raw gyro + accel output block sampled in one burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawBlock {
    /// Raw gyroscope reading.
    pub gyro: GyroRaw,
    /// Raw accelerometer reading.
    pub accel: AccelRaw,
}

/// Decodes the 12-byte output block (gyro first, then accel).
pub(crate) fn decode_raw_block(buffer: &[u8; RAW_BLOCK_LEN]) -> RawBlock {
    let gyro = GyroRaw::from_le_bytes([
        buffer[RAW_BLOCK_GYRO_OFFSET],
        buffer[RAW_BLOCK_GYRO_OFFSET + 1],
        buffer[RAW_BLOCK_GYRO_OFFSET + 2],
        buffer[RAW_BLOCK_GYRO_OFFSET + 3],
        buffer[RAW_BLOCK_GYRO_OFFSET + 4],
        buffer[RAW_BLOCK_GYRO_OFFSET + 5],
    ]);
    let accel = AccelRaw::from_le_bytes([
        buffer[RAW_BLOCK_ACCEL_OFFSET],
        buffer[RAW_BLOCK_ACCEL_OFFSET + 1],
        buffer[RAW_BLOCK_ACCEL_OFFSET + 2],
        buffer[RAW_BLOCK_ACCEL_OFFSET + 3],
        buffer[RAW_BLOCK_ACCEL_OFFSET + 4],
        buffer[RAW_BLOCK_ACCEL_OFFSET + 5],
    ]);
    RawBlock { gyro, accel }
}

/// Decoded STATUS_REG data-ready flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataReadyStatus {
    /// New accelerometer data is available.
    pub accel: bool,
    /// New gyroscope data is available.
    pub gyro: bool,
    /// New temperature data is available.
    pub temperature: bool,
}

impl DataReadyStatus {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        Self {
            accel: bits & status_reg::XLDA != 0,
            gyro: bits & status_reg::GDA != 0,
            temperature: bits & status_reg::TDA != 0,
        }
    }
}

/// Counters tracking suspect bus traffic over the driver's lifetime.
///
/// Both counters only ever increase. `all_ones_warnings` counts raw samples
/// that came back as all ones (0xFFFF), a pattern a floating bus line also
/// produces; the sample is still returned, since -1 is a legitimate reading.
/// `other_failures` counts transport errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ErrorCounters {
    /// Samples whose raw bytes were all ones.
    pub all_ones_warnings: u32,
    /// Bus transfers that failed outright.
    pub other_failures: u32,
}
