// src/common/convert.rs

//! Pure conversions between echo time, distance and speed of sound.
//!
//! Sound travels to the target and back, so every conversion halves (or
//! doubles) the round trip.

use super::error::ConfigError;
use super::unit::Unit;
use core::time::Duration;

/// Converts an echo pulse width into a one-way distance in `unit`.
///
/// A zero duration always yields `0.0`, whatever the unit or speed.
pub fn to_distance(echo: Duration, speed_of_sound: f64, unit: Unit) -> f64 {
    if echo.is_zero() {
        return 0.0;
    }
    echo.as_secs_f64() * speed_of_sound * unit.per_meter() / 2.0
}

/// Derives the speed of sound (m/s) that maps `echo` onto `reference`.
///
/// # Errors
///
/// * `CalibrationUndefined` if `echo` is zero.
/// * `InvalidValue` if `reference` is not a positive, finite number.
pub fn to_speed(reference: f64, echo: Duration, unit: Unit) -> Result<f64, ConfigError> {
    if !(reference.is_finite() && reference > 0.0) {
        return Err(ConfigError::InvalidValue("reference distance"));
    }
    if echo.is_zero() {
        return Err(ConfigError::CalibrationUndefined);
    }
    Ok(reference * 2.0 / unit.per_meter() / echo.as_secs_f64())
}

/// Converts a distance in `unit` to metres.
///
/// Inches go through the exact 2.54 cm definition rather than the
/// reciprocal of the 39.3701 output factor.
pub fn to_meters(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Millimeter => value / 1000.0,
        Unit::Centimeter => value / 100.0,
        Unit::Meter => value,
        Unit::Inch => value * 2.54 / 100.0,
    }
}

/// Round-trip echo time for a target `meters` away.
pub(crate) fn round_trip_secs(meters: f64, speed_of_sound: f64) -> f64 {
    meters * (1.0 / speed_of_sound) * 2.0
}
