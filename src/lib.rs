#![cfg_attr(not(test), no_std)]
//! Platform-agnostic driver for the Aosong ASAIR AHT10/AHT15/AHT20/AHT21/
//! AHT25/AM2301B/AM2311B capacitive humidity and temperature sensors.
//!
//! The sensor exposes a handful of registers on the I2C bus; everything
//! interesting is the measurement transaction: trigger a conversion, wait
//! out the busy flag, bulk-read the raw frame and verify its CRC-8 trailer
//! (AHT2x family only). The driver owns that state machine and reports its
//! outcome through [`Status`]; it never retries on its own, so callers keep
//! full control over the retry policy.
//!
//! The bus and the delay source are injected as [`embedded_hal::i2c::I2c`]
//! and [`embedded_hal::delay::DelayNs`] implementations.
//!
//! ```
//! use ahtxx_rs::{Ahtxx, SensorKind, Status, I2C_ADDRESS_DEFAULT};
//! use embedded_hal_mock::eh1::delay::NoopDelay;
//! use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//!
//! let expectations = [
//!     // measurement trigger
//!     Transaction::write(I2C_ADDRESS_DEFAULT, vec![0xAC, 0x33, 0x00]),
//!     // busy probe: conversion already finished
//!     Transaction::read(I2C_ADDRESS_DEFAULT, vec![0x1C]),
//!     // six-byte frame {status, RH, RH, RH+T, T, T} from a live sensor
//!     Transaction::read(
//!         I2C_ADDRESS_DEFAULT,
//!         vec![0x1C, 0x65, 0xB4, 0x25, 0xCD, 0x26],
//!     ),
//! ];
//! let mut sensor = Ahtxx::new(
//!     I2cMock::new(&expectations),
//!     NoopDelay::new(),
//!     I2C_ADDRESS_DEFAULT,
//!     SensorKind::Aht1x,
//! );
//!
//! assert_eq!(sensor.refresh(), Status::Ok);
//! let humidity = sensor.humidity();
//! let temperature = sensor.temperature();
//! assert!(humidity > 39.0 && humidity < 41.0);
//! assert!(temperature > 22.0 && temperature < 23.0);
//!
//! let (mut i2c, _) = sensor.release();
//! i2c.done();
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

mod constants;
pub use constants::*;

mod crc;

mod error;
pub use error::*;

mod types;
pub use types::*;

/// An AHT1x/AHT2x sensor session on the I2C bus `I2C`.
///
/// Holds the bus address, sensor generation, the last raw measurement frame
/// and the [`Status`] of the last transaction. The frame is refreshed as a
/// whole or not at all: a failed transaction leaves the previous bytes in
/// place and the status records why they must not be trusted.
///
/// The session is strictly single-context: every call blocks until the
/// transaction finished or hit its first hard failure.
pub struct Ahtxx<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    kind: SensorKind,
    status: Status,
    frame: [u8; FRAME_LEN_AHT2X],
}

impl<I2C, D, E> Ahtxx<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a new sensor session.
    ///
    /// `address` is [`I2C_ADDRESS_DEFAULT`] for every part except AHT10
    /// units with the address pin pulled high, which use
    /// [`I2C_ADDRESS_ALTERNATE`]. Call [`Ahtxx::init`] before the first
    /// measurement; skipping it leaves the sensor's register state
    /// undefined.
    pub fn new(i2c: I2C, delay: D, address: u8, kind: SensorKind) -> Self {
        Ahtxx {
            i2c,
            delay,
            address,
            kind,
            status: Status::Ok,
            frame: [0; FRAME_LEN_AHT2X],
        }
    }

    /// Waits out the power-on settling time, forces normal acquisition mode
    /// and verifies that the factory calibration is loaded.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.delay.delay_ms(POWER_ON_DELAY_MS);
        self.set_normal_mode()?;
        self.check_calibration()
    }

    /// Runs one full measurement transaction and returns its outcome.
    ///
    /// The pipeline is strictly linear: trigger the conversion, probe the
    /// busy flag once (waiting out the remaining conversion time if it is
    /// set), bulk-read the frame, re-check the busy flag from the frame
    /// itself and, on AHT2x parts, verify the CRC-8 trailer. The first
    /// failure aborts the rest and is recorded as the session status; there
    /// is no internal retry.
    pub fn refresh(&mut self) -> Status {
        // Trigger the conversion.
        let command = [CMD_START_MEASUREMENT, CTRL_MEASUREMENT, CTRL_NOP];
        if self.i2c.write(self.address, &command).is_err() {
            debug!("measurement trigger not acknowledged");
            self.status = Status::AckError;
            return self.status;
        }

        // Probe the busy flag with a raw one-byte read of the status word.
        // A set flag costs exactly one wait for the remaining conversion
        // time; the flag is checked again from the frame after the bulk
        // read, so no poll loop is needed here.
        self.delay.delay_ms(CMD_DELAY_MS);
        let mut word = [0u8; 1];
        if self.i2c.read(self.address, &mut word).is_err() {
            debug!("busy probe returned no data");
            self.status = Status::DataError;
            return self.status;
        }
        if SensorStatus(word[0]).is_busy() {
            trace!("sensor busy, waiting out the conversion");
            self.status = Status::Busy;
            self.delay.delay_ms(MEASUREMENT_DELAY_MS - CMD_DELAY_MS);
        }

        // Bulk-read into a scratch buffer so a short read leaves the
        // previous frame untouched.
        let len = self.kind.frame_len();
        let mut scratch = [0u8; FRAME_LEN_AHT2X];
        if self.i2c.read(self.address, &mut scratch[..len]).is_err() {
            debug!("frame read shorter than {} bytes", len);
            self.status = Status::DataError;
            return self.status;
        }
        self.frame[..len].copy_from_slice(&scratch[..len]);

        // Re-check the busy flag from the buffered frame, no bus traffic.
        if SensorStatus(self.frame[0]).is_busy() {
            debug!("sensor still busy after conversion wait");
            self.status = Status::Busy;
            return self.status;
        }

        if self.kind.has_crc() && crc::crc8(&self.frame[..6]) != self.frame[6] {
            warn!("frame failed crc check: {:02X?}", &self.frame[..7]);
            self.status = Status::CrcMismatch;
            return self.status;
        }

        trace!("frame refreshed: {:02X?}", &self.frame[..len]);
        self.status = Status::Ok;
        self.status
    }

    /// Returns the outcome of the last measurement transaction. Pure, no
    /// bus access.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Relative humidity in %RH, decoded from the buffered frame.
    ///
    /// Returns [`ERROR_READING`] unless the last transaction left
    /// [`Status::Ok`]; [`Ahtxx::status`] stays the authoritative way to
    /// tell the failure modes apart.
    pub fn humidity(&self) -> f32 {
        if self.status != Status::Ok {
            return ERROR_READING;
        }
        decode_humidity(&self.frame)
    }

    /// Temperature in °C, decoded from the buffered frame.
    ///
    /// Returns [`ERROR_READING`] unless the last transaction left
    /// [`Status::Ok`].
    pub fn temperature(&self) -> f32 {
        if self.status != Status::Ok {
            return ERROR_READING;
        }
        decode_temperature(&self.frame)
    }

    /// Runs a fresh measurement transaction, then decodes humidity.
    pub fn read_humidity(&mut self) -> f32 {
        self.refresh();
        self.humidity()
    }

    /// Runs a fresh measurement transaction, then decodes temperature.
    pub fn read_temperature(&mut self) -> f32 {
        self.refresh();
        self.temperature()
    }

    /// Both buffered readings in one call.
    pub fn data(&self) -> AhtData {
        AhtData {
            humidity: self.humidity(),
            temperature: self.temperature(),
        }
    }

    /// Selects normal acquisition mode, the default after power-up.
    pub fn set_normal_mode(&mut self) -> Result<(), Error<E>> {
        self.write_init_register(CTRL_CAL_ON | CTRL_MODE_NORMAL)
    }

    /// Selects cycle (continuous) acquisition mode.
    pub fn set_cycle_mode(&mut self) -> Result<(), Error<E>> {
        self.write_init_register(CTRL_CAL_ON | CTRL_MODE_CYCLE)
    }

    /// Selects command acquisition mode.
    pub fn set_command_mode(&mut self) -> Result<(), Error<E>> {
        self.write_init_register(CTRL_CAL_ON | CTRL_MODE_COMMAND)
    }

    /// Restarts the sensor without a power cycle.
    ///
    /// All registers fall back to their defaults, so the reset is followed
    /// by the same normal-mode + calibration-check sequence as
    /// [`Ahtxx::init`]. The first failing step short-circuits the rest.
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[CMD_SOFT_RESET])
            .map_err(Error::I2c)?;
        self.delay.delay_ms(SOFT_RESET_DELAY_MS);
        self.set_normal_mode()?;
        self.check_calibration()
    }

    /// Reads the status register.
    pub fn read_status(&mut self) -> Result<SensorStatus, Error<E>> {
        self.delay.delay_ms(CMD_DELAY_MS);
        self.i2c
            .write(self.address, &[REG_STATUS])
            .map_err(Error::I2c)?;
        let mut word = [0u8; 1];
        self.i2c
            .read(self.address, &mut word)
            .map_err(Error::I2c)?;
        Ok(SensorStatus(word[0]))
    }

    /// Reconfigures the sensor generation.
    ///
    /// Affects the frame length and CRC applicability of all subsequent
    /// operations. Must not be called while a transaction is in flight.
    pub fn set_kind(&mut self, kind: SensorKind) {
        self.kind = kind;
    }

    /// Destroys the session and hands back the bus and delay peripherals.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn check_calibration(&mut self) -> Result<(), Error<E>> {
        let status = self.read_status()?;
        if status.is_calibrated() {
            Ok(())
        } else {
            warn!("calibration bit not set, status word {:#04X}", status.0);
            Err(Error::Uncalibrated)
        }
    }

    // Mode writes share the three-byte {register, control, NOP} shape; only
    // the register depends on the sensor generation.
    fn write_init_register(&mut self, control: u8) -> Result<(), Error<E>> {
        self.delay.delay_ms(CMD_DELAY_MS);
        let command = [self.kind.init_register(), control, CTRL_NOP];
        self.i2c.write(self.address, &command).map_err(Error::I2c)
    }
}

// The raw frame packs two 20-bit readings around a shared middle byte:
// frame[3] carries the low humidity nibble on top and the high temperature
// nibble below. Both decoders are pure integer bit plumbing until the final
// scale step, so they reproduce bit-for-bit on every platform.

fn decode_humidity(frame: &[u8; FRAME_LEN_AHT2X]) -> f32 {
    let raw = (u32::from(frame[1]) << 12) | (u32::from(frame[2]) << 4) | (u32::from(frame[3]) >> 4);
    raw as f32 / (1u32 << 20) as f32 * 100.0
}

fn decode_temperature(frame: &[u8; FRAME_LEN_AHT2X]) -> f32 {
    let raw =
        (u32::from(frame[3] & 0x0F) << 16) | (u32::from(frame[4]) << 8) | u32::from(frame[5]);
    raw as f32 / (1u32 << 20) as f32 * 200.0 - 50.0
}
