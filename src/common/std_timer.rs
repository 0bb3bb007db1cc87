// src/common/std_timer.rs

use super::hal_traits::EchoTimer;
use core::time::Duration;
use spin_sleep::SpinSleeper;
use std::time::Instant;

/// Host timer backed by `std::time::Instant`.
///
/// `thread::sleep` overshoots microsecond delays by far more than the 10 µs
/// trigger pulse, so delays go through a spin sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTimer {
    sleeper: SpinSleeper,
}

impl StdTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer whose sleeper trusts the OS for delays longer than `native_accuracy_ns`.
    pub fn with_accuracy(native_accuracy_ns: u32) -> Self {
        StdTimer { sleeper: SpinSleeper::new(native_accuracy_ns) }
    }
}

impl EchoTimer for StdTimer {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay_us(&mut self, us: u32) {
        self.sleeper.sleep(Duration::from_micros(us as u64));
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeper.sleep(duration);
    }
}

#[cfg(feature = "impl-generic-hal")]
impl super::hal_adapter::MonotonicClock for StdTimer {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }
}
