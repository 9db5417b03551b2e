//! LSM6DSO register definitions.
//!
//! This module contains the UI register map from the datasheet, plus the bit
//! masks used by the driver.

#![allow(dead_code)] // Full register map is intentional; many entries are not wired yet.

/// LSM6DSO register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Embedded functions configuration access.
    FuncCfgAccess = 0x01,
    /// SDO/OCS pin control.
    PinCtrl = 0x02,
    /// FIFO control register 1.
    FifoCtrl1 = 0x07,
    /// FIFO control register 2.
    FifoCtrl2 = 0x08,
    /// FIFO control register 3.
    FifoCtrl3 = 0x09,
    /// FIFO control register 4.
    FifoCtrl4 = 0x0A,
    /// Counter batch data rate register 1.
    CounterBdrReg1 = 0x0B,
    /// Counter batch data rate register 2.
    CounterBdrReg2 = 0x0C,
    /// INT1 pin control.
    Int1Ctrl = 0x0D,
    /// INT2 pin control.
    Int2Ctrl = 0x0E,
    /// Device identifier register.
    WhoAmI = 0x0F,
    /// Control register 1 (accelerometer ODR + full-scale).
    Ctrl1Xl = 0x10,
    /// Control register 2 (gyroscope ODR + full-scale).
    Ctrl2G = 0x11,
    /// Control register 3 (common settings: BDU, auto-increment, reset).
    Ctrl3C = 0x12,
    /// Control register 4 (misc settings).
    Ctrl4C = 0x13,
    /// Control register 5 (self-test and rounding).
    Ctrl5C = 0x14,
    /// Control register 6 (accelerometer high-performance flag).
    Ctrl6C = 0x15,
    /// Control register 7 (gyroscope high-performance flag).
    Ctrl7G = 0x16,
    /// Control register 8 (accelerometer filters + full-scale mode).
    Ctrl8Xl = 0x17,
    /// Control register 9 (DEN settings).
    Ctrl9Xl = 0x18,
    /// Control register 10 (timestamp enable).
    Ctrl10C = 0x19,
    /// Interrupt source register.
    AllIntSrc = 0x1A,
    /// Wake-up source register.
    WakeUpSrc = 0x1B,
    /// Tap source register.
    TapSrc = 0x1C,
    /// 6D orientation source register.
    D6dSrc = 0x1D,
    /// Data-ready status register.
    StatusReg = 0x1E,
    /// Temperature low byte.
    OutTempL = 0x20,
    /// Temperature high byte.
    OutTempH = 0x21,
    /// Gyroscope X-axis low byte.
    OutxLG = 0x22,
    /// Gyroscope X-axis high byte.
    OutxHG = 0x23,
    /// Gyroscope Y-axis low byte.
    OutyLG = 0x24,
    /// Gyroscope Y-axis high byte.
    OutyHG = 0x25,
    /// Gyroscope Z-axis low byte.
    OutzLG = 0x26,
    /// Gyroscope Z-axis high byte.
    OutzHG = 0x27,
    /// Accelerometer X-axis low byte.
    OutxLA = 0x28,
    /// Accelerometer X-axis high byte.
    OutxHA = 0x29,
    /// Accelerometer Y-axis low byte.
    OutyLA = 0x2A,
    /// Accelerometer Y-axis high byte.
    OutyHA = 0x2B,
    /// Accelerometer Z-axis low byte.
    OutzLA = 0x2C,
    /// Accelerometer Z-axis high byte.
    OutzHA = 0x2D,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected values for WHO_AM_I.
pub mod who_am_i {
    /// Expected WHO_AM_I register value.
    pub const EXPECTED: u8 = 0x6C;
}

/// FUNC_CFG_ACCESS register bits.
pub mod func_cfg_access {
    /// Embedded functions register access enable.
    pub const FUNC_CFG_EN: u8 = 0b1000_0000;
    /// Sensor hub register access enable.
    pub const SHUB_REG_EN: u8 = 0b0100_0000;
}

/// CTRL1_XL register bits.
pub mod ctrl1_xl {
    /// Accelerometer output data rate selection mask.
    pub const ODR_XL_MASK: u8 = 0b1111_0000;
    /// Accelerometer output data rate selection shift.
    pub const ODR_XL_SHIFT: u8 = 4;
    /// Accelerometer full-scale selection mask.
    pub const FS_XL_MASK: u8 = 0b0000_1100;
    /// Accelerometer full-scale selection shift.
    pub const FS_XL_SHIFT: u8 = 2;
    /// Accelerometer LPF2 path enable.
    pub const LPF2_XL_EN: u8 = 0b0000_0010;
}

/// CTRL2_G register bits.
pub mod ctrl2_g {
    /// Gyroscope output data rate selection mask.
    pub const ODR_G_MASK: u8 = 0b1111_0000;
    /// Gyroscope output data rate selection shift.
    pub const ODR_G_SHIFT: u8 = 4;
    /// Gyroscope full-scale selection mask (whole nibble, FS_125 included).
    pub const FS_G_MASK: u8 = 0b0000_1111;
    /// Gyroscope full-scale code mask (two-bit code above FS_125).
    pub const FS_G_CODE_MASK: u8 = 0b0000_1100;
    /// Gyroscope full-scale code shift.
    pub const FS_G_CODE_SHIFT: u8 = 2;
    /// 125 dps full-scale flag (fixed sensitivity when set).
    pub const FS_125: u8 = 0b0000_0010;
}

/// CTRL3_C register bits.
pub mod ctrl3_c {
    /// Reboot memory content.
    pub const BOOT: u8 = 0b1000_0000;
    /// Block data update (output registers frozen until both bytes read).
    pub const BDU: u8 = 0b0100_0000;
    /// Interrupt active level.
    pub const H_LACTIVE: u8 = 0b0010_0000;
    /// Push-pull / open-drain select on interrupt pads.
    pub const PP_OD: u8 = 0b0001_0000;
    /// SPI serial interface mode (1 = 3-wire).
    pub const SIM: u8 = 0b0000_1000;
    /// Register address auto-increment on multi-byte access.
    pub const IF_INC: u8 = 0b0000_0100;
    /// Software reset.
    pub const SW_RESET: u8 = 0b0000_0001;
}

/// CTRL6_C register bits.
pub mod ctrl6_c {
    /// Accelerometer high-performance flag (the 1.6 Hz rate needs it set).
    pub const XL_HM_MODE: u8 = 0b0001_0000;
    /// DEN trigger mode mask.
    pub const TRIG_EN_MASK: u8 = 0b1110_0000;
}

/// CTRL7_G register bits.
pub mod ctrl7_g {
    /// Gyroscope high-performance flag.
    pub const G_HM_MODE: u8 = 0b1000_0000;
    /// Gyroscope digital HP filter enable.
    pub const HP_EN_G: u8 = 0b0100_0000;
}

/// CTRL8_XL register bits.
pub mod ctrl8_xl {
    /// Accelerometer full-scale mode (0 = legacy decode, 1 = extended decode).
    pub const XL_FS_MODE: u8 = 0b0000_0010;
    /// Accelerometer LPF2 cutoff selection mask.
    pub const HPCF_XL_MASK: u8 = 0b1110_0000;
}

/// STATUS_REG register bits.
pub mod status_reg {
    /// New temperature data available.
    pub const TDA: u8 = 0b0000_0100;
    /// New gyroscope data available.
    pub const GDA: u8 = 0b0000_0010;
    /// New accelerometer data available.
    pub const XLDA: u8 = 0b0000_0001;
}
