/// Accelerometer full-scale decode mode (CTRL8_XL.XL_FS_MODE).
///
/// The chip repurposes the accelerometer range code `0b01` depending on this
/// bit: it means 16g under [`Legacy`](Self::Legacy) decode and duplicates 2g
/// under [`Extended`](Self::Extended) decode, where 16g is not available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScaleMode {
    /// Legacy decode table; range code `0b01` selects 16g.
    Legacy,
    /// Extended decode table; range code `0b01` duplicates 2g, 16g is invalid.
    Extended,
}

impl FullScaleMode {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::Extended } else { Self::Legacy }
    }

    const fn index(self) -> usize {
        match self {
            Self::Legacy => 0,
            Self::Extended => 1,
        }
    }
}

/// Accelerometer full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    /// +/-2 g range.
    G2,
    /// +/-4 g range.
    G4,
    /// +/-8 g range.
    G8,
    /// +/-16 g range (legacy full-scale mode only).
    G16,
}

/// Range meaning of each CTRL1_XL code under each full-scale mode, indexed
/// by `(mode, code)`. Code `0b01` is the ambiguous entry.
const ACCEL_RANGE_DECODE: [[AccelRange; 4]; 2] = [
    [
        AccelRange::G2,
        AccelRange::G16,
        AccelRange::G4,
        AccelRange::G8,
    ],
    [
        AccelRange::G2,
        AccelRange::G2,
        AccelRange::G4,
        AccelRange::G8,
    ],
];

impl AccelRange {
    /// Returns the full-scale range in g.
    pub const fn g(self) -> u16 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Returns the CTRL1_XL range code.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0b00,
            Self::G16 => 0b01,
            Self::G4 => 0b10,
            Self::G8 => 0b11,
        }
    }

    /// Decodes a CTRL1_XL range code under the given full-scale mode.
    pub(crate) const fn from_bits(mode: FullScaleMode, code: u8) -> Self {
        ACCEL_RANGE_DECODE[mode.index()][(code & 0b11) as usize]
    }

    /// Clamps the range to what the full-scale mode can express.
    ///
    /// 16g does not exist under extended decode; the chip would silently
    /// read back 2g, so the request is downgraded to 8g instead.
    pub(crate) const fn clamp_to_mode(self, mode: FullScaleMode) -> Self {
        match (mode, self) {
            (FullScaleMode::Extended, Self::G16) => Self::G8,
            _ => self,
        }
    }
}

/// Accelerometer output data rate selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelDataRate {
    /// Output disabled (power-down).
    PowerDown,
    /// 1.6 Hz output data rate (available only with high-performance mode on).
    Hz1_6,
    /// 12.5 Hz output data rate.
    Hz12_5,
    /// 26 Hz output data rate.
    Hz26,
    /// 52 Hz output data rate.
    Hz52,
    /// 104 Hz output data rate.
    Hz104,
    /// 208 Hz output data rate.
    Hz208,
    /// 416 Hz output data rate.
    Hz416,
    /// 833 Hz output data rate.
    Hz833,
    /// 1660 Hz output data rate.
    Hz1660,
    /// 3330 Hz output data rate.
    Hz3330,
    /// 6660 Hz output data rate.
    Hz6660,
}

impl AccelDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz1_6 => 1_600,
            Self::Hz12_5 => 12_500,
            Self::Hz26 => 26_000,
            Self::Hz52 => 52_000,
            Self::Hz104 => 104_000,
            Self::Hz208 => 208_000,
            Self::Hz416 => 416_000,
            Self::Hz833 => 833_000,
            Self::Hz1660 => 1_660_000,
            Self::Hz3330 => 3_330_000,
            Self::Hz6660 => 6_660_000,
        }
    }

    /// Returns the CTRL1_XL ODR code.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::PowerDown => 0b0000,
            Self::Hz12_5 => 0b0001,
            Self::Hz26 => 0b0010,
            Self::Hz52 => 0b0011,
            Self::Hz104 => 0b0100,
            Self::Hz208 => 0b0101,
            Self::Hz416 => 0b0110,
            Self::Hz833 => 0b0111,
            Self::Hz1660 => 0b1000,
            Self::Hz3330 => 0b1001,
            Self::Hz6660 => 0b1010,
            Self::Hz1_6 => 0b1011,
        }
    }

    /// Decodes a CTRL1_XL ODR code.
    pub(crate) const fn from_bits(code: u8) -> Option<Self> {
        match code {
            0b0000 => Some(Self::PowerDown),
            0b0001 => Some(Self::Hz12_5),
            0b0010 => Some(Self::Hz26),
            0b0011 => Some(Self::Hz52),
            0b0100 => Some(Self::Hz104),
            0b0101 => Some(Self::Hz208),
            0b0110 => Some(Self::Hz416),
            0b0111 => Some(Self::Hz833),
            0b1000 => Some(Self::Hz1660),
            0b1001 => Some(Self::Hz3330),
            0b1010 => Some(Self::Hz6660),
            0b1011 => Some(Self::Hz1_6),
            _ => None,
        }
    }

    /// Clamps the rate to what the current high-performance flag allows.
    ///
    /// 1.6 Hz cannot be combined with high-performance mode off; the chip
    /// would run at 12.5 Hz anyway, so the request is upgraded to the rate
    /// the hardware will actually produce.
    pub(crate) const fn clamp_to_high_performance(self, high_performance: bool) -> Self {
        match self {
            Self::Hz1_6 if !high_performance => Self::Hz12_5,
            _ => self,
        }
    }
}

/// Gyroscope full-scale range selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    /// +/-125 deg/s (FS_125 flag, fixed sensitivity).
    Dps125,
    /// +/-250 deg/s.
    Dps250,
    /// +/-500 deg/s.
    Dps500,
    /// +/-1000 deg/s.
    Dps1000,
    /// +/-2000 deg/s.
    Dps2000,
}

impl GyroRange {
    /// Returns the full-scale range in degrees per second.
    pub const fn dps(self) -> u16 {
        match self {
            Self::Dps125 => 125,
            Self::Dps250 => 250,
            Self::Dps500 => 500,
            Self::Dps1000 => 1000,
            Self::Dps2000 => 2000,
        }
    }

    /// Returns the CTRL2_G full-scale nibble (FS_125 flag included).
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::Dps250 => 0b0000,
            Self::Dps125 => 0b0010,
            Self::Dps500 => 0b0100,
            Self::Dps1000 => 0b1000,
            Self::Dps2000 => 0b1100,
        }
    }

    /// Decodes a CTRL2_G full-scale nibble.
    pub(crate) const fn from_bits(nibble: u8) -> Option<Self> {
        match nibble {
            0b0000 => Some(Self::Dps250),
            0b0010 => Some(Self::Dps125),
            0b0100 => Some(Self::Dps500),
            0b1000 => Some(Self::Dps1000),
            0b1100 => Some(Self::Dps2000),
            _ => None,
        }
    }
}

/// Gyroscope output data rate selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroDataRate {
    /// Output disabled (power-down).
    PowerDown,
    /// 12.5 Hz output data rate.
    Hz12_5,
    /// 26 Hz output data rate.
    Hz26,
    /// 52 Hz output data rate.
    Hz52,
    /// 104 Hz output data rate.
    Hz104,
    /// 208 Hz output data rate.
    Hz208,
    /// 416 Hz output data rate.
    Hz416,
    /// 833 Hz output data rate.
    Hz833,
    /// 1660 Hz output data rate.
    Hz1660,
    /// 3330 Hz output data rate.
    Hz3330,
    /// 6660 Hz output data rate.
    Hz6660,
}

impl GyroDataRate {
    /// Returns the output data rate in milli-hertz.
    pub const fn hz_milli(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz12_5 => 12_500,
            Self::Hz26 => 26_000,
            Self::Hz52 => 52_000,
            Self::Hz104 => 104_000,
            Self::Hz208 => 208_000,
            Self::Hz416 => 416_000,
            Self::Hz833 => 833_000,
            Self::Hz1660 => 1_660_000,
            Self::Hz3330 => 3_330_000,
            Self::Hz6660 => 6_660_000,
        }
    }

    /// Returns the CTRL2_G ODR code.
    pub(crate) const fn bits(self) -> u8 {
        match self {
            Self::PowerDown => 0b0000,
            Self::Hz12_5 => 0b0001,
            Self::Hz26 => 0b0010,
            Self::Hz52 => 0b0011,
            Self::Hz104 => 0b0100,
            Self::Hz208 => 0b0101,
            Self::Hz416 => 0b0110,
            Self::Hz833 => 0b0111,
            Self::Hz1660 => 0b1000,
            Self::Hz3330 => 0b1001,
            Self::Hz6660 => 0b1010,
        }
    }

    /// Decodes a CTRL2_G ODR code.
    pub(crate) const fn from_bits(code: u8) -> Option<Self> {
        match code {
            0b0000 => Some(Self::PowerDown),
            0b0001 => Some(Self::Hz12_5),
            0b0010 => Some(Self::Hz26),
            0b0011 => Some(Self::Hz52),
            0b0100 => Some(Self::Hz104),
            0b0101 => Some(Self::Hz208),
            0b0110 => Some(Self::Hz416),
            0b0111 => Some(Self::Hz833),
            0b1000 => Some(Self::Hz1660),
            0b1001 => Some(Self::Hz3330),
            0b1010 => Some(Self::Hz6660),
            _ => None,
        }
    }
}

/// Combined accelerometer configuration (range + ODR).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Accelerometer full-scale range.
    pub range: AccelRange,
    /// Accelerometer output data rate.
    pub odr: AccelDataRate,
}

impl AccelConfig {
    /// Default accelerometer configuration (8g, 416 Hz).
    pub const DEFAULT: Self = Self {
        range: AccelRange::G8,
        odr: AccelDataRate::Hz416,
    };

    /// Creates a new accelerometer configuration.
    pub const fn new(range: AccelRange, odr: AccelDataRate) -> Self {
        Self { range, odr }
    }

    /// Returns a new configuration with the provided range.
    #[must_use]
    pub const fn with_range(self, range: AccelRange) -> Self {
        Self { range, ..self }
    }

    /// Returns a new configuration with the provided output data rate.
    #[must_use]
    pub const fn with_odr(self, odr: AccelDataRate) -> Self {
        Self { odr, ..self }
    }
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Combined gyroscope configuration (range + ODR).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroConfig {
    /// Gyroscope full-scale range.
    pub range: GyroRange,
    /// Gyroscope output data rate.
    pub odr: GyroDataRate,
}

impl GyroConfig {
    /// Default gyroscope configuration (500 dps, 416 Hz).
    pub const DEFAULT: Self = Self {
        range: GyroRange::Dps500,
        odr: GyroDataRate::Hz416,
    };

    /// Creates a new gyroscope configuration.
    pub const fn new(range: GyroRange, odr: GyroDataRate) -> Self {
        Self { range, odr }
    }

    /// Returns a new configuration with the provided range.
    #[must_use]
    pub const fn with_range(self, range: GyroRange) -> Self {
        Self { range, ..self }
    }

    /// Returns a new configuration with the provided output data rate.
    #[must_use]
    pub const fn with_odr(self, odr: GyroDataRate) -> Self {
        Self { odr, ..self }
    }
}

impl Default for GyroConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
