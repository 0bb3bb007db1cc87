// src/common/status.rs

use core::fmt;

/// Outcome of the most recent measurement attempt.
///
/// The ordinal values are stable: callers compare against the raw
/// `0 / 1 / 2` codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum ErrorCode {
    /// Echo pulse was timed successfully.
    #[default]
    Good = 0,
    /// Echo never rose or never fell within the configured timeouts.
    OutOfRange = 1,
    /// Rest interval had not elapsed; the sensor was not triggered.
    NotReady = 2,
}

impl ErrorCode {
    /// Tries to convert a raw code into an `ErrorCode`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ErrorCode::Good),
            1 => Some(ErrorCode::OutOfRange),
            2 => Some(ErrorCode::NotReady),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_good(self) -> bool {
        matches!(self, ErrorCode::Good)
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        code as u8
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Good => write!(f, "good"),
            ErrorCode::OutOfRange => write!(f, "out of range"),
            ErrorCode::NotReady => write!(f, "not ready"),
        }
    }
}
