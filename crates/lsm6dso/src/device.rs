//! Device core operations for the LSM6DSO.

use crate::config::Config;
use crate::config::common::{
    AccelDataRate, AccelRange, FullScaleMode, GyroDataRate, GyroRange,
};
use crate::data::scale::{accel_counts_to_g, gyro_counts_to_dps};
use crate::data::{
    AccelRaw, AccelReading, DataReadyStatus, ErrorCounters, GyroRaw, GyroReading, RawBlock,
    decode_raw_block,
};
use crate::error::Error;
use crate::interface::Interface;
use crate::register::{
    Register, ctrl1_xl, ctrl2_g, ctrl3_c, ctrl6_c, ctrl7_g, ctrl8_xl, func_cfg_access, who_am_i,
};

pub(crate) struct DeviceCore<I> {
    interface: I,
    all_ones_warnings: u32,
    other_failures: u32,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn new(interface: I) -> Self {
        Self {
            interface,
            all_ones_warnings: 0,
            other_failures: 0,
        }
    }

    /// Initializes the device: verify WHO_AM_I, then write the startup
    /// configuration through the regular setters.
    ///
    /// The configuration is not retained; the register file is the only
    /// record of device state after this returns.
    pub(crate) fn init(&mut self, config: Config) -> Result<(), Error> {
        self.verify_device()?;
        self.set_increment(true)?;
        self.set_block_data_update(config.block_data_update)?;

        match config.accel {
            Some(accel) => {
                self.set_accel_range(accel.range)?;
                self.set_accel_data_rate(accel.odr)?;
            }
            None => {
                self.set_accel_data_rate(AccelDataRate::PowerDown)?;
            }
        }
        match config.gyro {
            Some(gyro) => {
                self.set_gyro_range(gyro.range)?;
                self.set_gyro_data_rate(gyro.odr)?;
            }
            None => self.set_gyro_data_rate(GyroDataRate::PowerDown)?,
        }
        Ok(())
    }

    pub(crate) fn verify_device(&mut self) -> Result<(), Error> {
        let who = self.read_reg(Register::WhoAmI)?;
        if who != who_am_i::EXPECTED {
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Enables or disables register address auto-increment (CTRL3_C.IF_INC).
    pub(crate) fn set_increment(&mut self, enable: bool) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl3C,
            ctrl3_c::IF_INC,
            if enable { ctrl3_c::IF_INC } else { 0 },
        )
    }

    /// Enables or disables block data update (CTRL3_C.BDU).
    pub(crate) fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl3C,
            ctrl3_c::BDU,
            if enable { ctrl3_c::BDU } else { 0 },
        )
    }

    pub(crate) fn block_data_update(&mut self) -> Result<bool, Error> {
        let ctrl3 = self.read_reg(Register::Ctrl3C)?;
        Ok(ctrl3 & ctrl3_c::BDU != 0)
    }

    /// Opens or closes the embedded functions register page
    /// (FUNC_CFG_ACCESS.FUNC_CFG_EN).
    pub(crate) fn set_embedded_functions(&mut self, enable: bool) -> Result<(), Error> {
        self.update_reg(
            Register::FuncCfgAccess,
            func_cfg_access::FUNC_CFG_EN,
            if enable { func_cfg_access::FUNC_CFG_EN } else { 0 },
        )
    }

    pub(crate) fn embedded_functions(&mut self) -> Result<bool, Error> {
        let access = self.read_reg(Register::FuncCfgAccess)?;
        Ok(access & func_cfg_access::FUNC_CFG_EN != 0)
    }

    /// Selects the accelerometer full-scale decode mode (CTRL8_XL.XL_FS_MODE).
    pub(crate) fn set_full_scale_mode(&mut self, mode: FullScaleMode) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl8Xl,
            ctrl8_xl::XL_FS_MODE,
            match mode {
                FullScaleMode::Extended => ctrl8_xl::XL_FS_MODE,
                FullScaleMode::Legacy => 0,
            },
        )
    }

    pub(crate) fn full_scale_mode(&mut self) -> Result<FullScaleMode, Error> {
        let ctrl8 = self.read_reg(Register::Ctrl8Xl)?;
        Ok(FullScaleMode::from_bit(ctrl8 & ctrl8_xl::XL_FS_MODE != 0))
    }

    /// Sets the accelerometer full-scale range.
    ///
    /// A 16g request while the extended decode table is active is silently
    /// downgraded to 8g, matching what the chip would deliver anyway. The
    /// range the hardware will use is returned.
    pub(crate) fn set_accel_range(&mut self, range: AccelRange) -> Result<AccelRange, Error> {
        let mode = self.full_scale_mode()?;
        let effective = range.clamp_to_mode(mode);
        self.update_reg(
            Register::Ctrl1Xl,
            ctrl1_xl::FS_XL_MASK,
            effective.bits() << ctrl1_xl::FS_XL_SHIFT,
        )?;
        Ok(effective)
    }

    /// Decodes the accelerometer range from CTRL1_XL under the current
    /// full-scale decode mode.
    pub(crate) fn accel_range(&mut self) -> Result<AccelRange, Error> {
        let mode = self.full_scale_mode()?;
        let ctrl1 = self.read_reg(Register::Ctrl1Xl)?;
        let code = (ctrl1 & ctrl1_xl::FS_XL_MASK) >> ctrl1_xl::FS_XL_SHIFT;
        Ok(AccelRange::from_bits(mode, code))
    }

    /// Sets the accelerometer output data rate.
    ///
    /// A 1.6 Hz request while high-performance mode is off is silently
    /// upgraded to 12.5 Hz, matching what the chip would deliver anyway.
    /// The rate the hardware will use is returned.
    pub(crate) fn set_accel_data_rate(
        &mut self,
        odr: AccelDataRate,
    ) -> Result<AccelDataRate, Error> {
        let high_performance = self.accel_high_performance()?;
        let effective = odr.clamp_to_high_performance(high_performance);
        self.update_reg(
            Register::Ctrl1Xl,
            ctrl1_xl::ODR_XL_MASK,
            effective.bits() << ctrl1_xl::ODR_XL_SHIFT,
        )?;
        Ok(effective)
    }

    pub(crate) fn accel_data_rate(&mut self) -> Result<AccelDataRate, Error> {
        let ctrl1 = self.read_reg(Register::Ctrl1Xl)?;
        let code = (ctrl1 & ctrl1_xl::ODR_XL_MASK) >> ctrl1_xl::ODR_XL_SHIFT;
        AccelDataRate::from_bits(code).ok_or(Error::InvalidData)
    }

    /// Sets the gyroscope full-scale range (CTRL2_G FS nibble).
    pub(crate) fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error> {
        self.update_reg(Register::Ctrl2G, ctrl2_g::FS_G_MASK, range.bits())
    }

    pub(crate) fn gyro_range(&mut self) -> Result<GyroRange, Error> {
        let ctrl2 = self.read_reg(Register::Ctrl2G)?;
        GyroRange::from_bits(ctrl2 & ctrl2_g::FS_G_MASK).ok_or(Error::InvalidData)
    }

    pub(crate) fn set_gyro_data_rate(&mut self, odr: GyroDataRate) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl2G,
            ctrl2_g::ODR_G_MASK,
            odr.bits() << ctrl2_g::ODR_G_SHIFT,
        )
    }

    pub(crate) fn gyro_data_rate(&mut self) -> Result<GyroDataRate, Error> {
        let ctrl2 = self.read_reg(Register::Ctrl2G)?;
        let code = (ctrl2 & ctrl2_g::ODR_G_MASK) >> ctrl2_g::ODR_G_SHIFT;
        GyroDataRate::from_bits(code).ok_or(Error::InvalidData)
    }

    /// Enables or disables accelerometer high-performance mode
    /// (CTRL6_C.XL_HM_MODE, set = on).
    pub(crate) fn set_accel_high_performance(&mut self, enable: bool) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl6C,
            ctrl6_c::XL_HM_MODE,
            if enable { ctrl6_c::XL_HM_MODE } else { 0 },
        )
    }

    pub(crate) fn accel_high_performance(&mut self) -> Result<bool, Error> {
        let ctrl6 = self.read_reg(Register::Ctrl6C)?;
        Ok(ctrl6 & ctrl6_c::XL_HM_MODE != 0)
    }

    /// Enables or disables gyroscope high-performance mode
    /// (CTRL7_G.G_HM_MODE, set = on).
    pub(crate) fn set_gyro_high_performance(&mut self, enable: bool) -> Result<(), Error> {
        self.update_reg(
            Register::Ctrl7G,
            ctrl7_g::G_HM_MODE,
            if enable { ctrl7_g::G_HM_MODE } else { 0 },
        )
    }

    pub(crate) fn gyro_high_performance(&mut self) -> Result<bool, Error> {
        let ctrl7 = self.read_reg(Register::Ctrl7G)?;
        Ok(ctrl7 & ctrl7_g::G_HM_MODE != 0)
    }

    /// Powers the accelerometer up or down without touching its range.
    ///
    /// Powering up a sensor that was down restores the 416 Hz default rate;
    /// a sensor already running keeps its rate.
    pub(crate) fn set_accel_enabled(&mut self, enable: bool) -> Result<(), Error> {
        if enable {
            if self.accel_data_rate()? == AccelDataRate::PowerDown {
                self.set_accel_data_rate(AccelDataRate::Hz416)?;
            }
        } else {
            self.set_accel_data_rate(AccelDataRate::PowerDown)?;
        }
        Ok(())
    }

    pub(crate) fn accel_enabled(&mut self) -> Result<bool, Error> {
        Ok(self.accel_data_rate()? != AccelDataRate::PowerDown)
    }

    /// Powers the gyroscope up or down without touching its range.
    pub(crate) fn set_gyro_enabled(&mut self, enable: bool) -> Result<(), Error> {
        if enable {
            if self.gyro_data_rate()? == GyroDataRate::PowerDown {
                self.set_gyro_data_rate(GyroDataRate::Hz416)?;
            }
        } else {
            self.set_gyro_data_rate(GyroDataRate::PowerDown)?;
        }
        Ok(())
    }

    pub(crate) fn gyro_enabled(&mut self) -> Result<bool, Error> {
        Ok(self.gyro_data_rate()? != GyroDataRate::PowerDown)
    }

    /// Reads and decodes the STATUS_REG data-ready flags.
    pub(crate) fn data_ready(&mut self) -> Result<DataReadyStatus, Error> {
        let status = self.read_reg(Register::StatusReg)?;
        Ok(DataReadyStatus::from_bits(status))
    }

    /// Reads raw accelerometer X.
    pub(crate) fn read_accel_raw_x(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutxLA)
    }

    /// Reads raw accelerometer Y.
    pub(crate) fn read_accel_raw_y(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutyLA)
    }

    /// Reads raw accelerometer Z.
    pub(crate) fn read_accel_raw_z(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutzLA)
    }

    /// Reads raw gyroscope X.
    pub(crate) fn read_gyro_raw_x(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutxLG)
    }

    /// Reads raw gyroscope Y.
    pub(crate) fn read_gyro_raw_y(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutyLG)
    }

    /// Reads raw gyroscope Z.
    pub(crate) fn read_gyro_raw_z(&mut self) -> Result<i16, Error> {
        self.read_sample_i16(Register::OutzLG)
    }

    /// Reads raw accelerometer data (X, Y, Z) in one burst.
    pub(crate) fn read_accel_raw(&mut self) -> Result<AccelRaw, Error> {
        let bytes = self.read_sample_bytes::<6>(Register::OutxLA)?;
        Ok(AccelRaw::from_le_bytes(bytes))
    }

    /// Reads raw gyroscope data (X, Y, Z) in one burst.
    pub(crate) fn read_gyro_raw(&mut self) -> Result<GyroRaw, Error> {
        let bytes = self.read_sample_bytes::<6>(Register::OutxLG)?;
        Ok(GyroRaw::from_le_bytes(bytes))
    }

    /// Reads gyroscope and accelerometer output in one 12-byte burst.
    pub(crate) fn read_raw_block(&mut self) -> Result<RawBlock, Error> {
        let bytes = self.read_sample_bytes::<{ crate::data::RAW_BLOCK_LEN }>(
            crate::data::RAW_BLOCK_START,
        )?;
        Ok(decode_raw_block(&bytes))
    }

    /// Reads accelerometer X scaled to g using the current register state.
    pub(crate) fn read_accel_x(&mut self) -> Result<f32, Error> {
        let range = self.accel_range()?;
        Ok(accel_counts_to_g(self.read_accel_raw_x()?, range))
    }

    /// Reads accelerometer Y scaled to g using the current register state.
    pub(crate) fn read_accel_y(&mut self) -> Result<f32, Error> {
        let range = self.accel_range()?;
        Ok(accel_counts_to_g(self.read_accel_raw_y()?, range))
    }

    /// Reads accelerometer Z scaled to g using the current register state.
    pub(crate) fn read_accel_z(&mut self) -> Result<f32, Error> {
        let range = self.accel_range()?;
        Ok(accel_counts_to_g(self.read_accel_raw_z()?, range))
    }

    /// Reads all accelerometer axes scaled to g.
    ///
    /// The range is re-read from CTRL1_XL/CTRL8_XL for every call, so the
    /// scaling always reflects the registers as they are now.
    pub(crate) fn read_accel(&mut self) -> Result<AccelReading, Error> {
        let range = self.accel_range()?;
        let raw = self.read_accel_raw()?;
        Ok(AccelReading {
            x: accel_counts_to_g(raw.x, range),
            y: accel_counts_to_g(raw.y, range),
            z: accel_counts_to_g(raw.z, range),
        })
    }

    /// Reads gyroscope X scaled to deg/s using the current register state.
    pub(crate) fn read_gyro_x(&mut self) -> Result<f32, Error> {
        let range = self.gyro_range_for_scaling()?;
        Ok(gyro_counts_to_dps(self.read_gyro_raw_x()?, range))
    }

    /// Reads gyroscope Y scaled to deg/s using the current register state.
    pub(crate) fn read_gyro_y(&mut self) -> Result<f32, Error> {
        let range = self.gyro_range_for_scaling()?;
        Ok(gyro_counts_to_dps(self.read_gyro_raw_y()?, range))
    }

    /// Reads gyroscope Z scaled to deg/s using the current register state.
    pub(crate) fn read_gyro_z(&mut self) -> Result<f32, Error> {
        let range = self.gyro_range_for_scaling()?;
        Ok(gyro_counts_to_dps(self.read_gyro_raw_z()?, range))
    }

    /// Reads all gyroscope axes scaled to deg/s.
    ///
    /// The range is re-read from CTRL2_G for every call.
    pub(crate) fn read_gyro(&mut self) -> Result<GyroReading, Error> {
        let range = self.gyro_range_for_scaling()?;
        let raw = self.read_gyro_raw()?;
        Ok(GyroReading {
            x: gyro_counts_to_dps(raw.x, range),
            y: gyro_counts_to_dps(raw.y, range),
            z: gyro_counts_to_dps(raw.z, range),
        })
    }

    /// Returns the lifetime error counters.
    pub(crate) const fn error_counters(&self) -> ErrorCounters {
        ErrorCounters {
            all_ones_warnings: self.all_ones_warnings,
            other_failures: self.other_failures,
        }
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    /// Scaling variant of [`gyro_range`](Self::gyro_range): the FS_125 flag
    /// wins over the range code, and the reserved bit is ignored, so this
    /// never fails to decode.
    fn gyro_range_for_scaling(&mut self) -> Result<GyroRange, Error> {
        let ctrl2 = self.read_reg(Register::Ctrl2G)?;
        if ctrl2 & ctrl2_g::FS_125 != 0 {
            return Ok(GyroRange::Dps125);
        }
        let code = (ctrl2 & ctrl2_g::FS_G_CODE_MASK) >> ctrl2_g::FS_G_CODE_SHIFT;
        Ok(match code {
            0b00 => GyroRange::Dps250,
            0b01 => GyroRange::Dps500,
            0b10 => GyroRange::Dps1000,
            _ => GyroRange::Dps2000,
        })
    }

    /// Reads a sample word, applying the counter policy: transport errors
    /// bump `other_failures` and propagate; an all-ones pattern bumps
    /// `all_ones_warnings` but the value (-1) is still returned, since it is
    /// also a legitimate reading.
    fn read_sample_i16(&mut self, reg: Register) -> Result<i16, Error> {
        let bytes = self.read_sample_bytes::<2>(reg)?;
        Ok(i16::from_le_bytes(bytes))
    }

    fn read_sample_bytes<const N: usize>(&mut self, reg: Register) -> Result<[u8; N], Error> {
        let mut buffer = [0u8; N];
        if let Err(err) = self.read_regs(reg, &mut buffer) {
            self.other_failures = self.other_failures.saturating_add(1);
            return Err(err);
        }
        for word in buffer.chunks_exact(2) {
            if word == [0xFF, 0xFF] {
                self.all_ones_warnings = self.all_ones_warnings.saturating_add(1);
            }
        }
        Ok(buffer)
    }

    fn update_reg(&mut self, reg: Register, mask: u8, value: u8) -> Result<(), Error> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, (current & !mask) | (value & mask))
    }

    pub(crate) fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        self.interface.read_reg(reg.addr())
    }

    pub(crate) fn read_regs(&mut self, reg: Register, buffer: &mut [u8]) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer)
    }

    pub(crate) fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value)
    }
}

impl<I2C> DeviceCore<crate::interface::I2cInterface<I2C>> {
    pub(crate) fn set_i2c_address(&mut self, address: u8) {
        self.interface.set_address(address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::status_reg;
    use crate::testing::MockInterface;

    fn core_with_chip() -> DeviceCore<MockInterface> {
        let interface =
            MockInterface::default().with_reg(Register::WhoAmI.addr(), who_am_i::EXPECTED);
        DeviceCore::new(interface)
    }

    #[test]
    fn init_rejects_wrong_chip_id() {
        let interface = MockInterface::default().with_reg(Register::WhoAmI.addr(), 0x69);
        let mut core = DeviceCore::new(interface);
        assert_eq!(core.init(Config::new()), Err(Error::WrongDevice));
        assert!(core.release().writes().is_empty());
    }

    #[test]
    fn init_applies_basic_settings() {
        let mut core = core_with_chip();
        core.init(Config::new()).expect("init");

        let interface = core.release();
        // IF_INC + BDU, accel 8g @ 416 Hz, gyro 500 dps @ 416 Hz.
        assert_eq!(
            interface.reg(Register::Ctrl3C.addr()),
            ctrl3_c::IF_INC | ctrl3_c::BDU
        );
        assert_eq!(interface.reg(Register::Ctrl1Xl.addr()), 0b0110_1100);
        assert_eq!(interface.reg(Register::Ctrl2G.addr()), 0b0110_0100);
    }

    #[test]
    fn init_powers_down_disabled_sensors() {
        let mut core = core_with_chip();
        core.init(Config::new().without_accel().without_gyro())
            .expect("init");

        let interface = core.release();
        assert_eq!(interface.reg(Register::Ctrl1Xl.addr()) & ctrl1_xl::ODR_XL_MASK, 0);
        assert_eq!(interface.reg(Register::Ctrl2G.addr()) & ctrl2_g::ODR_G_MASK, 0);
    }

    #[test]
    fn increment_uses_correct_bit() {
        let mut core = core_with_chip();
        core.set_increment(true).expect("set");
        assert_eq!(core.read_reg(Register::Ctrl3C).unwrap(), ctrl3_c::IF_INC);
        core.set_increment(false).expect("clear");
        assert_eq!(core.read_reg(Register::Ctrl3C).unwrap(), 0);
    }

    #[test]
    fn block_data_update_roundtrip() {
        let mut core = core_with_chip();
        core.set_block_data_update(true).expect("set");
        assert_eq!(core.block_data_update(), Ok(true));
        core.set_block_data_update(false).expect("clear");
        assert_eq!(core.block_data_update(), Ok(false));
    }

    #[test]
    fn setters_preserve_unrelated_bits() {
        let mut core = core_with_chip();
        // Pre-existing H_LACTIVE must survive IF_INC/BDU updates.
        core.write_reg(Register::Ctrl3C, ctrl3_c::H_LACTIVE).unwrap();
        core.set_increment(true).expect("if_inc");
        core.set_block_data_update(true).expect("bdu");
        assert_eq!(
            core.read_reg(Register::Ctrl3C).unwrap(),
            ctrl3_c::H_LACTIVE | ctrl3_c::IF_INC | ctrl3_c::BDU
        );
    }

    #[test]
    fn embedded_functions_toggle() {
        let mut core = core_with_chip();
        core.set_embedded_functions(true).expect("open");
        assert_eq!(
            core.read_reg(Register::FuncCfgAccess).unwrap(),
            func_cfg_access::FUNC_CFG_EN
        );
        assert_eq!(core.embedded_functions(), Ok(true));
        core.set_embedded_functions(false).expect("close");
        assert_eq!(core.embedded_functions(), Ok(false));
    }

    #[test]
    fn accel_range_roundtrip_through_registers() {
        let mut core = core_with_chip();
        assert_eq!(core.set_accel_range(AccelRange::G16), Ok(AccelRange::G16));
        assert_eq!(core.accel_range(), Ok(AccelRange::G16));
    }

    #[test]
    fn accel_range_16g_downgrades_in_extended_mode() {
        let mut core = core_with_chip();
        core.set_full_scale_mode(FullScaleMode::Extended).expect("mode");
        assert_eq!(core.set_accel_range(AccelRange::G16), Ok(AccelRange::G8));
        assert_eq!(core.accel_range(), Ok(AccelRange::G8));
    }

    #[test]
    fn accel_range_code_decodes_per_mode() {
        let mut core = core_with_chip();
        core.set_accel_range(AccelRange::G16).expect("range");
        assert_eq!(core.accel_range(), Ok(AccelRange::G16));
        // Same register code reads back as 2g once the extended table is on.
        core.set_full_scale_mode(FullScaleMode::Extended).expect("mode");
        assert_eq!(core.accel_range(), Ok(AccelRange::G2));
    }

    #[test]
    fn accel_odr_1_6hz_upgrades_without_high_performance() {
        let mut core = core_with_chip();
        assert_eq!(
            core.set_accel_data_rate(AccelDataRate::Hz1_6),
            Ok(AccelDataRate::Hz12_5)
        );
        core.set_accel_high_performance(true).expect("hp");
        assert_eq!(
            core.set_accel_data_rate(AccelDataRate::Hz1_6),
            Ok(AccelDataRate::Hz1_6)
        );
        assert_eq!(core.accel_data_rate(), Ok(AccelDataRate::Hz1_6));
    }

    #[test]
    fn accel_odr_update_keeps_range_bits() {
        let mut core = core_with_chip();
        core.set_accel_range(AccelRange::G4).expect("range");
        core.set_accel_data_rate(AccelDataRate::Hz104).expect("odr");
        assert_eq!(core.accel_range(), Ok(AccelRange::G4));
        assert_eq!(core.accel_data_rate(), Ok(AccelDataRate::Hz104));
    }

    #[test]
    fn accel_odr_undefined_code_is_invalid_data() {
        let interface =
            MockInterface::default().with_reg(Register::Ctrl1Xl.addr(), 0b1111_0000);
        let mut core = DeviceCore::new(interface);
        assert_eq!(core.accel_data_rate(), Err(Error::InvalidData));
    }

    #[test]
    fn gyro_range_roundtrip_through_registers() {
        let mut core = core_with_chip();
        core.set_gyro_range(GyroRange::Dps2000).expect("range");
        assert_eq!(core.gyro_range(), Ok(GyroRange::Dps2000));
        core.set_gyro_range(GyroRange::Dps125).expect("range");
        assert_eq!(core.gyro_range(), Ok(GyroRange::Dps125));
    }

    #[test]
    fn gyro_odr_update_keeps_fs_nibble() {
        let mut core = core_with_chip();
        core.set_gyro_range(GyroRange::Dps1000).expect("range");
        core.set_gyro_data_rate(GyroDataRate::Hz833).expect("odr");
        assert_eq!(core.gyro_range(), Ok(GyroRange::Dps1000));
        assert_eq!(core.gyro_data_rate(), Ok(GyroDataRate::Hz833));
    }

    #[test]
    fn high_performance_flags_toggle_independently() {
        let mut core = core_with_chip();
        core.set_accel_high_performance(true).expect("accel hp");
        core.set_gyro_high_performance(true).expect("gyro hp");
        assert_eq!(core.accel_high_performance(), Ok(true));
        assert_eq!(core.gyro_high_performance(), Ok(true));
        core.set_accel_high_performance(false).expect("accel hp off");
        assert_eq!(core.accel_high_performance(), Ok(false));
        assert_eq!(core.gyro_high_performance(), Ok(true));
    }

    #[test]
    fn enable_restores_default_rate_only_when_powered_down() {
        let mut core = core_with_chip();
        core.set_accel_enabled(true).expect("enable");
        assert_eq!(core.accel_data_rate(), Ok(AccelDataRate::Hz416));

        core.set_accel_data_rate(AccelDataRate::Hz104).expect("odr");
        core.set_accel_enabled(true).expect("enable again");
        assert_eq!(core.accel_data_rate(), Ok(AccelDataRate::Hz104));

        core.set_accel_enabled(false).expect("disable");
        assert_eq!(core.accel_enabled(), Ok(false));
        // Range bits survive the power-down.
        core.set_gyro_enabled(true).expect("gyro enable");
        assert_eq!(core.gyro_data_rate(), Ok(GyroDataRate::Hz416));
    }

    #[test]
    fn data_ready_decodes_status_reg() {
        let interface = MockInterface::default()
            .with_reg(Register::StatusReg.addr(), status_reg::XLDA | status_reg::GDA);
        let mut core = DeviceCore::new(interface);

        let status = core.data_ready().expect("status");
        assert!(status.accel);
        assert!(status.gyro);
        assert!(!status.temperature);
    }

    #[test]
    fn raw_reads_are_little_endian() {
        let interface = MockInterface::default()
            .with_reg(Register::OutxLA.addr(), 0xE8)
            .with_reg(Register::OutxLA.addr() + 1, 0x03)
            .with_reg(Register::OutzLG.addr(), 0x18)
            .with_reg(Register::OutzLG.addr() + 1, 0xFC);
        let mut core = DeviceCore::new(interface);

        assert_eq!(core.read_accel_raw_x(), Ok(1000));
        assert_eq!(core.read_gyro_raw_z(), Ok(-1000));
        assert_eq!(core.error_counters(), ErrorCounters::default());
    }

    #[test]
    fn all_ones_sample_is_counted_but_returned() {
        let interface = MockInterface::default()
            .with_reg(Register::OutyLA.addr(), 0xFF)
            .with_reg(Register::OutyLA.addr() + 1, 0xFF);
        let mut core = DeviceCore::new(interface);

        assert_eq!(core.read_accel_raw_y(), Ok(-1));
        assert_eq!(core.read_accel_raw_y(), Ok(-1));
        let counters = core.error_counters();
        assert_eq!(counters.all_ones_warnings, 2);
        assert_eq!(counters.other_failures, 0);
    }

    #[test]
    fn transport_failure_is_counted_and_propagated() {
        let interface = MockInterface::default().with_read_fault(Register::OutxLG.addr());
        let mut core = DeviceCore::new(interface);

        assert_eq!(core.read_gyro_raw_x(), Err(Error::Bus));
        assert_eq!(core.read_gyro_raw(), Err(Error::Bus));
        let counters = core.error_counters();
        assert_eq!(counters.other_failures, 2);
        assert_eq!(counters.all_ones_warnings, 0);
    }

    #[test]
    fn burst_read_counts_all_ones_per_axis() {
        let mut interface = MockInterface::default();
        // Y axis all ones, X and Z ordinary.
        interface.set_reg(Register::OutyLA.addr(), 0xFF);
        interface.set_reg(Register::OutyLA.addr() + 1, 0xFF);
        let mut core = DeviceCore::new(interface);

        let raw = core.read_accel_raw().expect("read");
        assert_eq!(raw.y, -1);
        assert_eq!(core.error_counters().all_ones_warnings, 1);
    }

    #[test]
    fn raw_block_reads_gyro_then_accel() {
        let mut interface = MockInterface::default();
        interface.set_reg(Register::OutxLG.addr(), 0x01);
        interface.set_reg(Register::OutxLA.addr(), 0x02);
        let mut core = DeviceCore::new(interface);

        let block = core.read_raw_block().expect("block");
        assert_eq!(block.gyro.x, 1);
        assert_eq!(block.accel.x, 2);
    }

    #[test]
    fn scaled_accel_tracks_register_state() {
        let mut interface = MockInterface::default();
        interface.set_reg(Register::OutxLA.addr(), 0x00);
        interface.set_reg(Register::OutxLA.addr() + 1, 0x10); // 4096 counts
        let mut core = DeviceCore::new(interface);

        core.set_accel_range(AccelRange::G2).expect("range");
        let at_2g = core.read_accel_x().expect("read");
        assert!((at_2g - 4096.0 * 0.061 / 1000.0).abs() < 1e-6);

        // Re-ranging between reads must change the scale of the next read.
        core.set_accel_range(AccelRange::G16).expect("range");
        let at_16g = core.read_accel_x().expect("read");
        assert!((at_16g - 4096.0 * 0.488 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn scaled_gyro_honors_fs_125_flag() {
        let mut interface = MockInterface::default();
        interface.set_reg(Register::OutxLG.addr(), 0xE8);
        interface.set_reg(Register::OutxLG.addr() + 1, 0x03); // 1000 counts
        // FS_125 set alongside a nonzero range code; the flag wins.
        interface.set_reg(
            Register::Ctrl2G.addr(),
            ctrl2_g::FS_125 | 0b0100,
        );
        let mut core = DeviceCore::new(interface);

        let dps = core.read_gyro_x().expect("read");
        assert!((dps - 1000.0 * 4.375 / 1000.0).abs() < 1e-6);
    }

    #[test]
    fn scaled_gyro_by_range_code() {
        let mut interface = MockInterface::default();
        interface.set_reg(Register::OutxLG.addr(), 0xE8);
        interface.set_reg(Register::OutxLG.addr() + 1, 0x03);
        let mut core = DeviceCore::new(interface);

        core.set_gyro_range(GyroRange::Dps2000).expect("range");
        let dps = core.read_gyro_x().expect("read");
        assert!((dps - 70.0).abs() < 1e-4);
    }

    #[test]
    fn scaled_read_fails_when_config_read_fails() {
        let interface = MockInterface::default().with_read_fault(Register::Ctrl2G.addr());
        let mut core = DeviceCore::new(interface);
        assert_eq!(core.read_gyro_x(), Err(Error::Bus));
        // Config reads are not sample reads; the failure counter is untouched.
        assert_eq!(core.error_counters().other_failures, 0);
    }
}
