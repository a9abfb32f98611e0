use crate::constants::{
    FRAME_LEN_AHT1X, FRAME_LEN_AHT2X, REG_INIT_AHT1X, REG_INIT_AHT2X, STATUS_BUSY, STATUS_CAL_ON,
    STATUS_MODE_MASK,
};

/// Aosong sensor generations this driver can talk to.
///
/// The generation decides the initialization register, the measurement frame
/// length and whether the frame carries a CRC-8 trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// AHT10/AHT15: six-byte frame, no checksum trailer.
    Aht1x,
    /// AHT20/AHT21/AHT25/AM2301B/AM2311B: seven-byte frame ending in CRC-8.
    Aht2x,
}

impl SensorKind {
    pub(crate) fn init_register(self) -> u8 {
        match self {
            SensorKind::Aht1x => REG_INIT_AHT1X,
            SensorKind::Aht2x => REG_INIT_AHT2X,
        }
    }

    pub(crate) fn frame_len(self) -> usize {
        match self {
            SensorKind::Aht1x => FRAME_LEN_AHT1X,
            SensorKind::Aht2x => FRAME_LEN_AHT2X,
        }
    }

    pub(crate) fn has_crc(self) -> bool {
        matches!(self, SensorKind::Aht2x)
    }
}

/// Outcome of the most recent measurement transaction.
///
/// Kept on the driver and consulted by the value accessors before they trust
/// the buffered frame. Every variant except [`Status::Ok`] leaves the
/// previous frame stale; none of them is retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The transaction completed and the buffered frame is trustworthy.
    Ok,
    /// The sensor was still converting when the frame was read back.
    Busy,
    /// The sensor did not acknowledge a command on the bus.
    AckError,
    /// The bus returned fewer bytes than the frame requires.
    DataError,
    /// The frame trailer did not match the computed CRC-8 (AHT2x only).
    CrcMismatch,
}

/// Acquisition mode reported in bits 6-5 of the AHT1x status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorMode {
    Normal,
    Cycle,
    Command,
}

/// One byte read back from the status register.
#[derive(Debug, Clone, Copy)]
pub struct SensorStatus(pub u8);

impl SensorStatus {
    /// The sensor is still performing an internal measurement.
    pub fn is_busy(self) -> bool {
        self.0 & STATUS_BUSY != 0
    }

    /// Factory calibration coefficients are loaded. Checked once at
    /// power-up; rechecking during data collection is not required.
    pub fn is_calibrated(self) -> bool {
        self.0 & STATUS_CAL_ON != 0
    }

    /// Acquisition mode bits. Meaningful on AHT1x parts only; the AHT2x
    /// datasheet marks these bits reserved.
    pub fn mode(self) -> SensorMode {
        match self.0 & STATUS_MODE_MASK {
            0x00 => SensorMode::Normal,
            0x20 => SensorMode::Cycle,
            _ => SensorMode::Command,
        }
    }
}

/// Converted AHT1x/AHT2x reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AhtData {
    /// Relative humidity [%RH]
    pub humidity: f32,
    /// Ambient temperature [°C]
    pub temperature: f32,
}
