// src/common/error.rs

use core::fmt::Debug;

/// Errors raised while validating units or configuration values.
///
/// These never involve the GPIO port, so they carry no I/O type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Unit token is not one of `mm`, `cm`, `m` or `inch`.
    #[error("Invalid unit of measure")]
    InvalidUnit,

    /// Calibration needs a non-zero echo duration to divide by.
    #[error("Calibration undefined: echo duration was zero")]
    CalibrationUndefined,

    /// A configuration value was non-positive or not finite.
    #[error("Invalid value for {0}")]
    InvalidValue(&'static str),
}

/// Errors surfaced by the echo ranging driver.
///
/// Timeouts and not-ready rejections are *not* errors: they are recorded in
/// [`ErrorCode`](super::ErrorCode) and yield a zero distance.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EchoError<E = ()>
where
    E: Debug, // Still need Debug for the generic Io error
{
    /// Underlying GPIO/port error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// Rejected unit or configuration value.
    #[error("Configuration error: {0}")]
    Config(ConfigError),
}

impl<E: Debug> EchoError<E> {
    /// Returns the configuration error, if this is one.
    pub fn config(&self) -> Option<ConfigError> {
        match self {
            EchoError::Config(e) => Some(*e),
            EchoError::Io(_) => None,
        }
    }
}

// Allow mapping from underlying HAL error if From is implemented
impl<E: Debug> From<E> for EchoError<E> {
    fn from(e: E) -> Self {
        EchoError::Io(e)
    }
}

// Note: ConfigError is mapped explicitly with `map_err(EchoError::Config)`;
// a second blanket From would overlap with the one above.
