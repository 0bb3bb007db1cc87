// src/sensor/mock.rs

// Scripted GPIO port shared by the sensor unit tests. Simulated time only
// moves when the code under test polls the echo pin or delays.

use crate::common::hal_traits::{EchoTimer, GpioPort};
use core::time::Duration;

pub const TRIGGER: u8 = 17;
pub const ECHO: u8 = 18;

const MAX_SCRIPT: usize = 32;

// --- Mock Instant ---
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MockInstant(pub u64);
impl core::ops::Add<Duration> for MockInstant {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        MockInstant(self.0.saturating_add(rhs.as_micros() as u64))
    }
}
impl core::ops::Sub<MockInstant> for MockInstant {
    type Output = Duration;
    fn sub(self, rhs: MockInstant) -> Duration {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

// --- Mock Pin Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockPinError;

/// What the echo pin does after one trigger pulse.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MockEcho {
    /// Rises `delay_us` after the trigger falls and stays high `width_us`.
    Pulse { delay_us: u64, width_us: u64 },
    /// Never rises.
    Silent,
    /// Rises after `delay_us` and never falls.
    Stuck { delay_us: u64 },
}

impl MockEcho {
    pub const fn pulse(width_us: u64) -> Self {
        MockEcho::Pulse { delay_us: 450, width_us }
    }
}

#[derive(Debug, Clone)]
pub struct MockPort {
    pub now_us: u64,
    /// Time consumed by each echo pin read.
    pub poll_us: u64,
    pub script: [MockEcho; MAX_SCRIPT],
    pub script_len: usize,
    script_start: u32,
    /// Used once the script is exhausted.
    pub fallback: MockEcho,
    pub trigger_high: bool,
    pub trigger_pulses: u32,
    pub echo_reads: u32,
    active: Option<(u64, MockEcho)>,
    pub outputs_configured: u32,
    pub inputs_configured: u32,
    pub released: u32,
    pub fail_configure: bool,
    pub fail_read: bool,
}

impl MockPort {
    pub fn new() -> Self {
        MockPort {
            now_us: 0,
            poll_us: 1,
            script: [MockEcho::Silent; MAX_SCRIPT],
            script_len: 0,
            script_start: 0,
            fallback: MockEcho::Silent,
            trigger_high: false,
            trigger_pulses: 0,
            echo_reads: 0,
            active: None,
            outputs_configured: 0,
            inputs_configured: 0,
            released: 0,
            fail_configure: false,
            fail_read: false,
        }
    }

    /// Every trigger produces `echo`.
    pub fn always(echo: MockEcho) -> Self {
        let mut port = Self::new();
        port.fallback = echo;
        port
    }

    /// The next triggers produce `echoes` in order, then the fallback.
    pub fn load_script(&mut self, echoes: &[MockEcho]) {
        assert!(echoes.len() <= MAX_SCRIPT);
        self.script[..echoes.len()].copy_from_slice(echoes);
        self.script_len = echoes.len();
        self.script_start = self.trigger_pulses;
    }

    pub fn advance(&mut self, us: u64) {
        self.now_us = self.now_us.saturating_add(us);
    }

    fn echo_level(&self) -> bool {
        let Some((fall_at, echo)) = self.active else { return false };
        let t = self.now_us;
        match echo {
            MockEcho::Pulse { delay_us, width_us } => {
                let rise = fall_at + delay_us;
                t >= rise && t < rise + width_us
            }
            MockEcho::Silent => false,
            MockEcho::Stuck { delay_us } => t >= fall_at + delay_us,
        }
    }
}

impl EchoTimer for MockPort {
    type Instant = MockInstant;
    fn now(&self) -> MockInstant {
        MockInstant(self.now_us)
    }
    fn delay_us(&mut self, us: u32) {
        self.advance(us as u64);
    }
}

impl GpioPort for MockPort {
    type Pin = u8;
    type Error = MockPinError;

    fn configure_output(&mut self, pin: u8) -> Result<(), MockPinError> {
        assert_eq!(pin, TRIGGER);
        if self.fail_configure {
            return Err(MockPinError);
        }
        self.outputs_configured += 1;
        Ok(())
    }

    fn configure_input(&mut self, pin: u8) -> Result<(), MockPinError> {
        assert_eq!(pin, ECHO);
        if self.fail_configure {
            return Err(MockPinError);
        }
        self.inputs_configured += 1;
        Ok(())
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), MockPinError> {
        assert_eq!(pin, TRIGGER);
        if high && !self.trigger_high {
            self.trigger_pulses += 1;
        }
        if !high && self.trigger_high {
            // Falling edge of the trigger starts the echo script.
            let index = (self.trigger_pulses - 1 - self.script_start) as usize;
            let echo = if index < self.script_len { self.script[index] } else { self.fallback };
            self.active = Some((self.now_us, echo));
        }
        self.trigger_high = high;
        Ok(())
    }

    fn read_digital(&mut self, pin: u8) -> Result<bool, MockPinError> {
        assert_eq!(pin, ECHO);
        if self.fail_read {
            return Err(MockPinError);
        }
        let level = self.echo_level();
        self.echo_reads += 1;
        self.advance(self.poll_us);
        Ok(level)
    }

    fn release(&mut self, _pin: u8) -> Result<(), MockPinError> {
        self.released += 1;
        Ok(())
    }
}
