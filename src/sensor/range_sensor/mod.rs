// src/sensor/range_sensor/mod.rs

// Helper impl blocks, split by concern
mod sampling;
mod settings;

use super::pulse_timer::PulseTimer;
use crate::common::{
    config::EchoConfig,
    error::{ConfigError, EchoError},
    hal_traits::{EchoTimer, GpioPort},
    status::ErrorCode,
    timing,
};
use core::time::Duration;
use log::debug;

/// A trigger/echo ultrasonic range sensor (HC-SR04 and compatibles).
///
/// Owns the port for its whole life; [`release`](RangeSensor::release)
/// hands it back. All operations block the caller: measurements busy-poll
/// the echo pin and averaging sleeps for the rest interval between samples.
///
/// Nothing here is synchronised. Share one sensor across threads only
/// behind a mutex.
pub struct RangeSensor<IF>
where
    IF: GpioPort + EchoTimer,
{
    interface: IF,
    pulse: PulseTimer<IF::Pin>,
    config: EchoConfig,
    last_read_time: IF::Instant,
    last_echo: Duration,
    error_code: ErrorCode,
}

impl<IF> RangeSensor<IF>
where
    IF: GpioPort + EchoTimer,
{
    /// Configures the pins and primes the sensor with default settings and
    /// the given speed of sound (m/s).
    pub fn new(
        interface: IF,
        trigger_pin: IF::Pin,
        echo_pin: IF::Pin,
        speed_of_sound: f64,
    ) -> Result<Self, EchoError<IF::Error>> {
        let config = EchoConfig::new(speed_of_sound).map_err(EchoError::Config)?;
        Self::with_config(interface, trigger_pin, echo_pin, config)
    }

    /// Configures the pins and primes the sensor.
    ///
    /// Priming drives the trigger low, waits for the sensor to settle and
    /// sends one pulse. The rest interval runs from that pulse, so the first
    /// measurement is only possible once it has elapsed. Pin errors abort
    /// construction.
    pub fn with_config(
        mut interface: IF,
        trigger_pin: IF::Pin,
        echo_pin: IF::Pin,
        config: EchoConfig,
    ) -> Result<Self, EchoError<IF::Error>> {
        if trigger_pin == echo_pin {
            return Err(EchoError::Config(ConfigError::InvalidValue("echo pin")));
        }
        interface.configure_output(trigger_pin)?;
        interface.configure_input(echo_pin)?;

        let pulse = PulseTimer::new(trigger_pin, echo_pin);
        interface.write_digital(trigger_pin, false)?;
        interface.sleep(timing::POWER_ON_SETTLE);
        pulse.fire(&mut interface)?;
        let last_read_time = interface.now();

        debug!(
            "range sensor ready: trigger {:?}, echo {:?}, {} m/s",
            trigger_pin,
            echo_pin,
            config.speed()
        );

        Ok(RangeSensor {
            interface,
            pulse,
            config,
            last_read_time,
            last_echo: Duration::ZERO,
            error_code: ErrorCode::Good,
        })
    }

    /// True once the rest interval since the last trigger has elapsed.
    pub fn is_ready(&self) -> bool {
        self.interface.now() - self.last_read_time > self.config.rest()
    }

    /// Result code of the most recent measurement attempt.
    #[inline]
    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Raw echo width of the most recent measurement attempt. Zero after a
    /// timeout or a not-ready rejection.
    #[inline]
    pub fn last_echo(&self) -> Duration {
        self.last_echo
    }

    /// Takes one raw measurement, honouring the rest interval.
    ///
    /// * Rest not elapsed: records `NotReady`, returns zero, pins untouched.
    /// * Echo timeout: records `OutOfRange`, returns zero.
    /// * Otherwise records `Good` and returns the echo width.
    ///
    /// `Good` can come with a zero width if the echo line rose and fell
    /// within one poll; averaging in [`read`](Self::read) counts such an echo
    /// as a failed sample.
    pub fn measure_once(&mut self) -> Result<Duration, EchoError<IF::Error>> {
        let started = self.interface.now();
        if started - self.last_read_time <= self.config.rest() {
            self.error_code = ErrorCode::NotReady;
            self.last_echo = Duration::ZERO;
            debug!("not ready: rest interval {:?} not elapsed", self.config.rest());
            return Ok(Duration::ZERO);
        }
        self.last_read_time = started;

        let pulse = self.pulse.measure(
            &mut self.interface,
            self.config.trigger_timeout(),
            self.config.effective_echo_timeout(),
        )?;

        self.error_code = if pulse.is_timeout() {
            debug!("out of range: {:?}", pulse);
            ErrorCode::OutOfRange
        } else {
            ErrorCode::Good
        };
        self.last_echo = pulse.width();
        Ok(self.last_echo)
    }

    /// Borrow the underlying port.
    pub fn interface(&self) -> &IF {
        &self.interface
    }

    /// Leaves the trigger low, releases both pins and returns the port.
    pub fn release(mut self) -> Result<IF, EchoError<IF::Error>> {
        let trigger = self.pulse.trigger_pin();
        let echo = self.pulse.echo_pin();
        self.interface.write_digital(trigger, false)?;
        self.interface.release(trigger)?;
        self.interface.release(echo)?;
        debug!("range sensor released");
        Ok(self.interface)
    }
}
