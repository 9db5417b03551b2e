//! Blocking `#![no_std]` driver for the
//! [LSM6DSO](https://www.st.com/en/mems-and-sensors/lsm6dso.html) 6-axis IMU
//! (accelerometer + gyroscope) from STMicroelectronics.
//!
//! This crate provides a lightweight, `embedded-hal` based driver for the
//! LSM6DSO. It intentionally avoids any core-ports dependencies so it can be
//! reused in adapter or BSP layers.
//!
//! The device's register file is the single source of truth: the driver
//! caches no configuration, and every getter and every scaled readout
//! decodes the registers as they are at that moment. Reconfiguring the
//! sensor between reads is always reflected in the next read.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_lsm6dso::{Config, Lsm6dsoI2c};
//! # use embedded_hal::i2c::I2c;
//! #
//! # fn example<I2C: I2c>(i2c: I2C) -> Result<(), ph_lsm6dso::Error> {
//! let mut imu: Lsm6dsoI2c<I2C> = Lsm6dsoI2c::new_i2c(i2c);
//! imu.init(Config::new())?;
//! let accel = imu.read_accel()?;
//! let gyro = imu.read_gyro()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Silent clamping
//!
//! Two register combinations the chip cannot express are clamped at the
//! setter, mirroring what the hardware would do on its own:
//!
//! - a 16g accelerometer range request while the extended full-scale decode
//!   mode is active is written as 8g;
//! - a 1.6 Hz accelerometer rate request while high-performance mode is off
//!   is written as 12.5 Hz.
//!
//! Both setters return the value actually written.
//!
//! # Error accounting
//!
//! Sample reads keep two monotonic counters, available via
//! [`Lsm6dso::error_counters`]: all-ones raw words (a pattern a floating bus
//! also produces; the sample is still returned) and outright transport
//! failures.
//!
//! # Not yet supported
//!
//! - FIFO buffering and batching.
//! - Interrupt routing (INT1/INT2) and the embedded function engines
//!   (tap, tilt, pedometer); only the register page toggle is exposed.
//! - Temperature output (the data-ready flag is decoded, the output
//!   registers are not read).

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here; thresholds and config are in clippy.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

mod config;
mod data;
mod device;
mod driver;
mod error;
mod interface;
mod register;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Lsm6dsoAddress;
pub use interface::{I2cInterface, SpiInterface};

// Configuration
pub use config::Config;
pub use config::{AccelConfig, AccelDataRate, AccelRange, FullScaleMode};
pub use config::{GyroConfig, GyroDataRate, GyroRange};

// Driver
pub use driver::{Lsm6dso, Lsm6dsoI2c, Lsm6dsoSpi};

// Data types
pub use data::{
    AccelRaw, AccelReading, DataReadyStatus, ErrorCounters, GyroRaw, GyroReading, RawBlock,
    accel_mg_per_lsb, gyro_mdps_per_lsb,
};

pub use error::Error;
