// src/sensor/range_sensor/settings.rs

use super::RangeSensor;
use crate::common::{
    config::EchoConfig,
    error::EchoError,
    hal_traits::{EchoTimer, GpioPort},
    unit::Unit,
};
use core::time::Duration;
use log::debug;

// Accessors and mutators. Every setter goes through `EchoConfig`, which
// validates the value and keeps the echo timeout consistent.
impl<IF> RangeSensor<IF>
where
    IF: GpioPort + EchoTimer,
{
    #[inline]
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Speed of sound in m/s.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.config.speed()
    }

    /// Adjusts the speed of sound to ambient conditions; recomputes the echo timeout.
    pub fn set_speed(&mut self, speed_of_sound: f64) -> Result<(), EchoError<IF::Error>> {
        self.config.set_speed(speed_of_sound).map_err(EchoError::Config)?;
        debug!("speed of sound {} m/s, echo timeout {:?}", speed_of_sound, self.config.echo_timeout());
        Ok(())
    }

    #[inline]
    pub fn rest(&self) -> Duration {
        self.config.rest()
    }

    /// Sets the rest interval. Too short a rest makes readings unstable.
    pub fn set_rest(&mut self, rest: Duration) -> Result<(), EchoError<IF::Error>> {
        self.config.set_rest(rest).map_err(EchoError::Config)
    }

    #[inline]
    pub fn trigger_timeout(&self) -> Duration {
        self.config.trigger_timeout()
    }

    pub fn set_trigger_timeout(&mut self, timeout: Duration) -> Result<(), EchoError<IF::Error>> {
        self.config.set_trigger_timeout(timeout).map_err(EchoError::Config)
    }

    #[inline]
    pub fn echo_timeout(&self) -> Duration {
        self.config.echo_timeout()
    }

    /// Overrides the echo timeout; an alternative to [`set_max_distance`](Self::set_max_distance).
    pub fn set_echo_timeout(&mut self, timeout: Duration) -> Result<(), EchoError<IF::Error>> {
        self.config.set_echo_timeout(timeout).map_err(EchoError::Config)
    }

    #[inline]
    pub fn echo_return_offset(&self) -> Duration {
        self.config.echo_return_offset()
    }

    /// Increase if echoes go out of range before the max distance is reached.
    pub fn set_echo_return_offset(&mut self, offset: Duration) {
        self.config.set_echo_return_offset(offset);
    }

    /// Max scan distance in metres, if set.
    #[inline]
    pub fn max_distance(&self) -> Option<f64> {
        self.config.max_distance()
    }

    /// Limits the scan range. A smaller range makes failed reads return sooner.
    pub fn set_max_distance(&mut self, value: f64, unit: Unit) -> Result<(), EchoError<IF::Error>> {
        self.config.set_max_distance(value, unit).map_err(EchoError::Config)?;
        debug!("max distance {} {}, echo timeout {:?}", value, unit, self.config.echo_timeout());
        Ok(())
    }

    #[inline]
    pub fn default_unit(&self) -> Unit {
        self.config.default_unit()
    }

    /// Unit used by [`send`](Self::send) and [`samples`](Self::samples).
    pub fn set_default_unit(&mut self, unit: Unit) {
        self.config.set_default_unit(unit);
    }

    /// Parses a unit token (`mm`, `cm`, `m`, `inch`) and makes it the default.
    pub fn set_default_unit_str(&mut self, token: &str) -> Result<(), EchoError<IF::Error>> {
        self.config.set_default_unit_str(token).map_err(EchoError::Config)
    }
}
