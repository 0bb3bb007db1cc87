// src/common/config.rs

use super::convert::{round_trip_secs, to_meters};
use super::error::ConfigError;
use super::timing;
use super::unit::Unit;
use core::time::Duration;

/// Tunable measurement settings for one sensor.
///
/// The echo timeout depends on the speed of sound and, when set, on the
/// maximum scan distance. Fields are private so that every change goes
/// through a setter that keeps them consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoConfig {
    speed_of_sound: f64,
    rest_interval: Duration,
    trigger_timeout: Duration,
    echo_timeout: Duration,
    echo_return_offset: Duration,
    max_scan_distance: Option<f64>,
    default_unit: Unit,
}

impl Default for EchoConfig {
    fn default() -> Self {
        let speed = timing::DEFAULT_SPEED_OF_SOUND;
        EchoConfig {
            speed_of_sound: speed,
            rest_interval: timing::DEFAULT_REST_INTERVAL,
            trigger_timeout: timing::DEFAULT_TRIGGER_TIMEOUT,
            echo_timeout: Duration::from_secs_f64(timing::DEFAULT_ECHO_WINDOW_FACTOR / speed),
            echo_return_offset: timing::DEFAULT_ECHO_RETURN_OFFSET,
            max_scan_distance: None,
            default_unit: Unit::default(),
        }
    }
}

impl EchoConfig {
    /// Default settings with a custom speed of sound.
    pub fn new(speed_of_sound: f64) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_speed(speed_of_sound)?;
        Ok(config)
    }

    // --- Builder style ---

    pub fn with_rest(mut self, rest: Duration) -> Result<Self, ConfigError> {
        self.set_rest(rest)?;
        Ok(self)
    }

    pub fn with_trigger_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        self.set_trigger_timeout(timeout)?;
        Ok(self)
    }

    pub fn with_max_distance(mut self, value: f64, unit: Unit) -> Result<Self, ConfigError> {
        self.set_max_distance(value, unit)?;
        Ok(self)
    }

    pub fn with_echo_return_offset(mut self, offset: Duration) -> Self {
        self.echo_return_offset = offset;
        self
    }

    pub fn with_default_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    // --- Getters ---

    /// Speed of sound in metres per second.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed_of_sound
    }

    #[inline]
    pub fn rest(&self) -> Duration {
        self.rest_interval
    }

    #[inline]
    pub fn trigger_timeout(&self) -> Duration {
        self.trigger_timeout
    }

    /// Echo timeout without the return offset.
    #[inline]
    pub fn echo_timeout(&self) -> Duration {
        self.echo_timeout
    }

    #[inline]
    pub fn echo_return_offset(&self) -> Duration {
        self.echo_return_offset
    }

    /// Deadline handed to the pulse timer: echo timeout plus return offset.
    #[inline]
    pub fn effective_echo_timeout(&self) -> Duration {
        self.echo_timeout + self.echo_return_offset
    }

    /// Maximum scan distance in metres, if one was set.
    #[inline]
    pub fn max_distance(&self) -> Option<f64> {
        self.max_scan_distance
    }

    #[inline]
    pub fn default_unit(&self) -> Unit {
        self.default_unit
    }

    // --- Setters ---

    /// Sets the speed of sound and recomputes the echo timeout.
    ///
    /// With a max scan distance stored, the timeout keeps that distance
    /// ceiling; otherwise the default 3 m window is recomputed.
    pub fn set_speed(&mut self, speed_of_sound: f64) -> Result<(), ConfigError> {
        if !(speed_of_sound.is_finite() && speed_of_sound > 0.0) {
            return Err(ConfigError::InvalidValue("speed of sound"));
        }
        let echo_timeout = match self.max_scan_distance {
            Some(meters) => window(round_trip_secs(meters, speed_of_sound))?,
            None => window((1.0 / speed_of_sound) * timing::DEFAULT_ECHO_WINDOW_FACTOR)?,
        };
        self.speed_of_sound = speed_of_sound;
        self.echo_timeout = echo_timeout;
        Ok(())
    }

    pub fn set_rest(&mut self, rest: Duration) -> Result<(), ConfigError> {
        if rest.is_zero() {
            return Err(ConfigError::InvalidValue("rest interval"));
        }
        self.rest_interval = rest;
        Ok(())
    }

    pub fn set_trigger_timeout(&mut self, timeout: Duration) -> Result<(), ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue("trigger timeout"));
        }
        self.trigger_timeout = timeout;
        Ok(())
    }

    /// Overrides the echo timeout directly.
    ///
    /// The stored max scan distance is left alone; a later speed change
    /// recomputes the timeout from it again.
    pub fn set_echo_timeout(&mut self, timeout: Duration) -> Result<(), ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidValue("echo timeout"));
        }
        self.echo_timeout = timeout;
        Ok(())
    }

    pub fn set_echo_return_offset(&mut self, offset: Duration) {
        self.echo_return_offset = offset;
    }

    /// Limits the scan range; echoes beyond it report `OutOfRange`.
    ///
    /// Non-positive or non-finite values are rejected without changing state.
    pub fn set_max_distance(&mut self, value: f64, unit: Unit) -> Result<(), ConfigError> {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidValue("max distance"));
        }
        let meters = to_meters(value, unit);
        let echo_timeout = window(round_trip_secs(meters, self.speed_of_sound))?;
        self.max_scan_distance = Some(meters);
        self.echo_timeout = echo_timeout;
        Ok(())
    }

    pub fn set_default_unit(&mut self, unit: Unit) {
        self.default_unit = unit;
    }

    /// Parses and sets the default unit; unknown tokens leave it unchanged.
    pub fn set_default_unit_str(&mut self, token: &str) -> Result<(), ConfigError> {
        self.default_unit = token.parse()?;
        Ok(())
    }
}

fn window(secs: f64) -> Result<Duration, ConfigError> {
    match Duration::try_from_secs_f64(secs) {
        Ok(d) if !d.is_zero() => Ok(d),
        _ => Err(ConfigError::InvalidValue("echo timeout")),
    }
}
