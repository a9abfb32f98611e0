// I2C_ADDRESS_DEFAULT is the factory bus address shared by all AHT1x/AHT2x
// parts.
pub const I2C_ADDRESS_DEFAULT: u8 = 0x38;

// I2C_ADDRESS_ALTERNATE is the second address available on AHT10 parts with
// the address pin pulled high.
pub const I2C_ADDRESS_ALTERNATE: u8 = 0x39;

// REG_STATUS selects the status word for a register read.
pub const REG_STATUS: u8 = 0x71;

// REG_INIT_AHT1X is the initialization/mode register of the AHT1x family.
pub const REG_INIT_AHT1X: u8 = 0xE1;

// REG_INIT_AHT2X is the initialization/mode register of the AHT2x family.
pub const REG_INIT_AHT2X: u8 = 0xBE;

// CMD_START_MEASUREMENT triggers one humidity + temperature conversion.
pub const CMD_START_MEASUREMENT: u8 = 0xAC;

// CMD_SOFT_RESET restarts the sensor without a power cycle and restores the
// default register state.
pub const CMD_SOFT_RESET: u8 = 0xBA;

// CTRL_MEASUREMENT is the control byte that accompanies CMD_START_MEASUREMENT.
pub const CTRL_MEASUREMENT: u8 = 0x33;

// CTRL_NOP pads every three-byte command sequence.
pub const CTRL_NOP: u8 = 0x00;

// CTRL_CAL_ON keeps the factory calibration coefficients enabled; OR'd into
// every initialization-register write.
pub const CTRL_CAL_ON: u8 = 0x08;

// Mode bits written to the initialization register.
pub const CTRL_MODE_NORMAL: u8 = 0x00;
pub const CTRL_MODE_CYCLE: u8 = 0x20;
pub const CTRL_MODE_COMMAND: u8 = 0x40;

// STATUS_BUSY flags an in-progress conversion (bit 7 of the status word).
pub const STATUS_BUSY: u8 = 0x80;

// STATUS_CAL_ON flags loaded factory calibration (bit 3 of the status word).
pub const STATUS_CAL_ON: u8 = 0x08;

// STATUS_MODE_MASK covers the acquisition-mode bits 6-5; AHT1x only, the
// AHT2x datasheet marks them reserved.
pub const STATUS_MODE_MASK: u8 = 0x60;

// Datasheet timing, in milliseconds.
pub const POWER_ON_DELAY_MS: u32 = 100;
pub const MEASUREMENT_DELAY_MS: u32 = 80;
pub const CMD_DELAY_MS: u32 = 10;
pub const SOFT_RESET_DELAY_MS: u32 = 20;

// Measurement frame lengths: {status, RH, RH, RH+T, T, T} plus a CRC-8
// trailer on the AHT2x family.
pub const FRAME_LEN_AHT1X: usize = 6;
pub const FRAME_LEN_AHT2X: usize = 7;

// ERROR_READING is the sentinel returned by the value accessors when the
// last transaction did not leave a trustworthy frame. It sits outside both
// physical ranges (0..100 %RH, -40..85 C).
pub const ERROR_READING: f32 = 255.0;
