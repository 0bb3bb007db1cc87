// src/sensor/range_sensor/sampling.rs

use super::RangeSensor;
use crate::common::{
    convert,
    error::{ConfigError, EchoError},
    hal_traits::{EchoTimer, GpioPort},
    unit::Unit,
};
use core::time::Duration;
use log::{debug, warn};

// Implementation block for reads, averaging and calibration
impl<IF> RangeSensor<IF>
where
    IF: GpioPort + EchoTimer,
{
    /// Measures the distance in `unit`.
    ///
    /// With `sample_count < 2` this is a single read. Otherwise it takes
    /// `sample_count` readings, resting between each, and averages the echo
    /// widths of the successful ones. Returns `0.0` when nothing succeeded;
    /// check [`error_code`](RangeSensor::error_code) for the last outcome.
    pub fn read(&mut self, unit: Unit, sample_count: u32) -> Result<f64, EchoError<IF::Error>> {
        let echo = if sample_count < 2 {
            self.measure_once()?
        } else {
            self.average_echo(sample_count)?.0
        };
        Ok(convert::to_distance(echo, self.config.speed(), unit))
    }

    /// Averages `sample_count` readings in the default unit and also reports
    /// how many of them were usable.
    pub fn samples(&mut self, sample_count: u32) -> Result<(f64, u32), EchoError<IF::Error>> {
        let (echo, good) = self.average_echo(sample_count)?;
        let distance = convert::to_distance(echo, self.config.speed(), self.config.default_unit());
        Ok((distance, good))
    }

    /// One-shot read in the default unit.
    pub fn send(&mut self) -> Result<f64, EchoError<IF::Error>> {
        let echo = self.measure_once()?;
        Ok(convert::to_distance(echo, self.config.speed(), self.config.default_unit()))
    }

    /// Recomputes the speed of sound against a target `reference` away.
    ///
    /// Takes an averaged read of `sample_count` samples, then derives the
    /// speed from the *last raw* echo width rather than the average, and
    /// stores it (recomputing the echo timeout). Returns the new speed.
    ///
    /// # Errors
    ///
    /// `CalibrationUndefined` when the last echo width is zero (for example
    /// the final sample timed out); the stored speed is unchanged.
    pub fn calibrate(
        &mut self,
        reference: f64,
        unit: Unit,
        sample_count: u32,
    ) -> Result<f64, EchoError<IF::Error>> {
        if !(reference.is_finite() && reference > 0.0) {
            return Err(EchoError::Config(ConfigError::InvalidValue("reference distance")));
        }
        let averaged = self.read(unit, sample_count)?;

        let speed = convert::to_speed(reference, self.last_echo, unit).map_err(|e| {
            warn!("calibration against {} {} failed: {}", reference, unit, e);
            EchoError::Config(e)
        })?;
        self.config.set_speed(speed).map_err(EchoError::Config)?;

        debug!(
            "calibrated to {} m/s (reference {} {}, averaged reading {} {})",
            speed, reference, unit, averaged, unit
        );
        Ok(speed)
    }

    /// Takes `sample_count` readings and returns the mean width of the
    /// non-zero ones together with their count.
    fn average_echo(&mut self, sample_count: u32) -> Result<(Duration, u32), EchoError<IF::Error>> {
        let mut total = Duration::ZERO;
        let mut good: u32 = 0;

        for _ in 0..sample_count {
            let echo = self.measure_once()?;
            if !echo.is_zero() {
                total += echo;
                good += 1;
            }
            // Rest the sensor
            self.interface.sleep(self.config.rest());
        }

        if good == 0 {
            return Ok((Duration::ZERO, 0));
        }
        debug!("{} of {} samples good", good, sample_count);
        Ok((total / good, good))
    }
}
