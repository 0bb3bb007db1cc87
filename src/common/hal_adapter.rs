// src/common/hal_adapter.rs

//! Adapter from `embedded-hal` 1.0 pins and delays to the sensor traits.
//!
//! `embedded-hal` has no clock trait, so the adapter also takes a
//! [`MonotonicClock`] supplied by the board support code.

use super::hal_traits::{EchoInstant, EchoTimer, GpioPort};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin};

/// Source of monotonic instants.
pub trait MonotonicClock {
    type Instant: EchoInstant;

    fn now(&self) -> Self::Instant;
}

/// The two lines of a trigger/echo sensor, used as pin identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EchoLine {
    Trigger,
    Echo,
}

/// Error type of [`HalPort`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HalPortError {
    /// The trigger output pin failed.
    Trigger(ErrorKind),
    /// The echo input pin failed.
    Echo(ErrorKind),
    /// Operation does not match the fixed direction of the line.
    WrongDirection(EchoLine),
}

/// Bundles an output pin, an input pin, a delay and a clock.
///
/// Pin directions are fixed by the HAL types, so the `configure_*` calls
/// only check that the requested direction matches.
#[derive(Debug)]
pub struct HalPort<TRIG, ECHO, DELAY, CLOCK> {
    trigger: TRIG,
    echo: ECHO,
    delay: DELAY,
    clock: CLOCK,
}

impl<TRIG, ECHO, DELAY, CLOCK> HalPort<TRIG, ECHO, DELAY, CLOCK>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    pub fn new(trigger: TRIG, echo: ECHO, delay: DELAY, clock: CLOCK) -> Self {
        HalPort { trigger, echo, delay, clock }
    }

    /// Gives back the wrapped HAL parts.
    pub fn into_parts(self) -> (TRIG, ECHO, DELAY, CLOCK) {
        (self.trigger, self.echo, self.delay, self.clock)
    }
}

impl<TRIG, ECHO, DELAY, CLOCK> GpioPort for HalPort<TRIG, ECHO, DELAY, CLOCK>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type Pin = EchoLine;
    type Error = HalPortError;

    fn configure_output(&mut self, pin: EchoLine) -> Result<(), HalPortError> {
        match pin {
            EchoLine::Trigger => Ok(()),
            EchoLine::Echo => Err(HalPortError::WrongDirection(pin)),
        }
    }

    fn configure_input(&mut self, pin: EchoLine) -> Result<(), HalPortError> {
        match pin {
            EchoLine::Echo => Ok(()),
            EchoLine::Trigger => Err(HalPortError::WrongDirection(pin)),
        }
    }

    fn write_digital(&mut self, pin: EchoLine, high: bool) -> Result<(), HalPortError> {
        if pin != EchoLine::Trigger {
            return Err(HalPortError::WrongDirection(pin));
        }
        let result = if high { self.trigger.set_high() } else { self.trigger.set_low() };
        result.map_err(|e| HalPortError::Trigger(e.kind()))
    }

    fn read_digital(&mut self, pin: EchoLine) -> Result<bool, HalPortError> {
        if pin != EchoLine::Echo {
            return Err(HalPortError::WrongDirection(pin));
        }
        self.echo.is_high().map_err(|e| HalPortError::Echo(e.kind()))
    }

    fn release(&mut self, pin: EchoLine) -> Result<(), HalPortError> {
        // Leave the trigger idle-low; the echo input needs nothing.
        match pin {
            EchoLine::Trigger => self.write_digital(pin, false),
            EchoLine::Echo => Ok(()),
        }
    }
}

impl<TRIG, ECHO, DELAY, CLOCK> EchoTimer for HalPort<TRIG, ECHO, DELAY, CLOCK>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    DELAY: DelayNs,
    CLOCK: MonotonicClock,
{
    type Instant = CLOCK::Instant;

    fn now(&self) -> Self::Instant {
        self.clock.now()
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
