//! Sensitivity tables for raw sensor data.
//!
//! Values are the datasheet sensitivities in milli-g (accelerometer) and
//! milli-deg/s (gyroscope) per LSB. Scaled readouts divide by 1000 to land
//! in g and deg/s.

use crate::config::common::{AccelRange, GyroRange};

/// Returns the accelerometer sensitivity in mg/LSB.
pub const fn accel_mg_per_lsb(range: AccelRange) -> f32 {
    match range {
        AccelRange::G2 => 0.061,
        AccelRange::G4 => 0.122,
        AccelRange::G8 => 0.244,
        AccelRange::G16 => 0.488,
    }
}

/// Returns the gyroscope sensitivity in mdps/LSB.
pub const fn gyro_mdps_per_lsb(range: GyroRange) -> f32 {
    match range {
        GyroRange::Dps125 => 4.375,
        GyroRange::Dps250 => 8.75,
        GyroRange::Dps500 => 17.5,
        GyroRange::Dps1000 => 35.0,
        GyroRange::Dps2000 => 70.0,
    }
}

/// Converts a raw accelerometer count to g at the given range.
pub const fn accel_counts_to_g(raw: i16, range: AccelRange) -> f32 {
    raw as f32 * accel_mg_per_lsb(range) / 1000.0
}

/// Converts a raw gyroscope count to deg/s at the given range.
pub const fn gyro_counts_to_dps(raw: i16, range: GyroRange) -> f32 {
    raw as f32 * gyro_mdps_per_lsb(range) / 1000.0
}
