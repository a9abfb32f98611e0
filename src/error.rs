use thiserror::Error;

/// Errors returned by the initialization, mode and reset paths.
///
/// The measurement transaction itself never returns this type; its failures
/// are reported through [`crate::Status`] so that callers own the retry
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error<E> {
    /// The underlying I2C transaction failed.
    #[error("i2c bus error")]
    I2c(E),
    /// The sensor did not report its factory calibration as loaded.
    #[error("factory calibration not loaded")]
    Uncalibrated,
}
