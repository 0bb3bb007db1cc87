// src/sensor/pulse_timer.rs

use crate::common::{
    error::EchoError,
    hal_traits::{EchoTimer, GpioPort},
    timing,
};
use core::time::Duration;
use log::trace;

/// Which edge the timer was waiting for when it gave up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EchoPhase {
    /// Echo pin never rose within the trigger timeout.
    Rise,
    /// Echo pin never fell within the echo timeout.
    Fall,
}

/// Result of one trigger/echo cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EchoPulse {
    /// Width of the echo pulse.
    Width(Duration),
    /// No complete echo within the deadlines.
    Timeout(EchoPhase),
}

impl EchoPulse {
    /// Pulse width, or zero on timeout.
    #[inline]
    pub fn width(&self) -> Duration {
        match self {
            EchoPulse::Width(d) => *d,
            EchoPulse::Timeout(_) => Duration::ZERO,
        }
    }

    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, EchoPulse::Timeout(_))
    }
}

/// Drives one trigger/echo pin pair.
#[derive(Debug, Copy, Clone)]
pub struct PulseTimer<P> {
    trigger: P,
    echo: P,
}

impl<P: Copy + core::fmt::Debug + PartialEq> PulseTimer<P> {
    pub fn new(trigger: P, echo: P) -> Self {
        PulseTimer { trigger, echo }
    }

    #[inline]
    pub fn trigger_pin(&self) -> P {
        self.trigger
    }

    #[inline]
    pub fn echo_pin(&self) -> P {
        self.echo
    }

    /// Emits one trigger pulse of the fixed width.
    pub fn fire<IF>(&self, iface: &mut IF) -> Result<(), EchoError<IF::Error>>
    where
        IF: GpioPort<Pin = P> + EchoTimer,
    {
        iface.write_digital(self.trigger, true)?;
        iface.delay_us(timing::TRIGGER_PULSE_WIDTH.as_micros() as u32);
        iface.write_digital(self.trigger, false)?;
        Ok(())
    }

    /// Triggers the sensor and times the echo pulse.
    ///
    /// Both deadlines count from the end of the trigger pulse. The start and
    /// stop stamps are the last clock readings taken *before* each edge was
    /// seen, so the width is not inflated by the trigger-to-rise latency.
    /// Timeouts are returned as [`EchoPulse::Timeout`]; only pin failures are
    /// errors.
    pub fn measure<IF>(
        &self,
        iface: &mut IF,
        trigger_timeout: Duration,
        echo_timeout: Duration,
    ) -> Result<EchoPulse, EchoError<IF::Error>>
    where
        IF: GpioPort<Pin = P> + EchoTimer,
    {
        self.fire(iface)?;
        let t0 = iface.now();

        // Waiting for rise.
        let mut echo_start = t0;
        while !iface.read_digital(self.echo)? {
            echo_start = iface.now();
            if echo_start - t0 > trigger_timeout {
                trace!("echo did not rise within {:?}", trigger_timeout);
                return Ok(EchoPulse::Timeout(EchoPhase::Rise));
            }
        }

        // Waiting for fall.
        let mut echo_stop = echo_start;
        while iface.read_digital(self.echo)? {
            echo_stop = iface.now();
            if echo_stop - t0 > echo_timeout {
                trace!("echo did not fall within {:?}", echo_timeout);
                return Ok(EchoPulse::Timeout(EchoPhase::Fall));
            }
        }

        let width = echo_stop - echo_start;
        trace!("echo width {:?}", width);
        Ok(EchoPulse::Width(width))
    }
}
