//! Shared test harness: a simulated trigger/echo sensor on a virtual clock.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use echo_range::common::{EchoTimer, GpioPort};

pub const TRIGGER_PIN: u8 = 17;
pub const ECHO_PIN: u8 = 18;

/// Virtual microsecond clock value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualInstant(pub u64);

impl std::ops::Add<Duration> for VirtualInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        VirtualInstant(self.0 + rhs.as_micros() as u64)
    }
}

impl std::ops::Sub for VirtualInstant {
    type Output = Duration;
    fn sub(self, rhs: Self) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

/// Handle on the simulated clock, kept by the test to let time pass.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock(Rc<Cell<u64>>);

impl VirtualClock {
    pub fn now_us(&self) -> u64 {
        self.0.get()
    }

    pub fn advance(&self, d: Duration) {
        self.0.set(self.0.get() + d.as_micros() as u64);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinFault;

/// Echo produced by one trigger: `Some(width_us)` or `None` for no echo.
pub type Echo = Option<u64>;

/// Simulated sensor. Each echo pin read costs one microsecond.
#[derive(Debug, Default)]
pub struct SimulatedSensor {
    pub clock: VirtualClock,
    pub echoes: VecDeque<Echo>,
    pub fallback: Echo,
    pub trigger_high: bool,
    pub pulses: u32,
    current: Option<(u64, Echo)>,
    pub released: Vec<u8>,
}

impl SimulatedSensor {
    /// Rise latency after the trigger falls.
    pub const RISE_DELAY_US: u64 = 300;

    /// Every measurement sees `fallback`.
    pub fn with_fallback(fallback: Echo) -> (Self, VirtualClock) {
        let port = SimulatedSensor { fallback, ..Default::default() };
        let clock = port.clock.clone();
        (port, clock)
    }

    /// Measurements see `echoes` in order, then no echo.
    pub fn with_echoes(echoes: &[Echo]) -> (Self, VirtualClock) {
        let port = SimulatedSensor { echoes: echoes.iter().copied().collect(), ..Default::default() };
        let clock = port.clock.clone();
        (port, clock)
    }
}

impl EchoTimer for SimulatedSensor {
    type Instant = VirtualInstant;

    fn now(&self) -> VirtualInstant {
        VirtualInstant(self.clock.now_us())
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance(Duration::from_micros(us as u64));
    }
}

impl GpioPort for SimulatedSensor {
    type Pin = u8;
    type Error = PinFault;

    fn configure_output(&mut self, pin: u8) -> Result<(), PinFault> {
        if pin == TRIGGER_PIN { Ok(()) } else { Err(PinFault) }
    }

    fn configure_input(&mut self, pin: u8) -> Result<(), PinFault> {
        if pin == ECHO_PIN { Ok(()) } else { Err(PinFault) }
    }

    fn write_digital(&mut self, _pin: u8, high: bool) -> Result<(), PinFault> {
        if high && !self.trigger_high {
            self.pulses += 1;
        }
        if !high && self.trigger_high {
            // The priming pulse never consumes a scripted echo.
            let echo = if self.pulses == 1 {
                None
            } else {
                self.echoes.pop_front().unwrap_or(self.fallback)
            };
            self.current = Some((self.clock.now_us(), echo));
        }
        self.trigger_high = high;
        Ok(())
    }

    fn read_digital(&mut self, _pin: u8) -> Result<bool, PinFault> {
        let now = self.clock.now_us();
        let level = match self.current {
            Some((fall, Some(width))) => {
                let rise = fall + Self::RISE_DELAY_US;
                now >= rise && now < rise + width
            }
            _ => false,
        };
        self.clock.advance(Duration::from_micros(1));
        Ok(level)
    }

    fn release(&mut self, pin: u8) -> Result<(), PinFault> {
        self.released.push(pin);
        Ok(())
    }
}

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
