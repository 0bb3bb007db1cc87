// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point on a monotonic clock.
///
/// Subtracting two instants yields the elapsed `Duration`; adding a
/// `Duration` yields a later instant. `std::time::Instant` satisfies this,
/// as does any tick counter wrapper with the two operator impls.
pub trait EchoInstant:
    Copy + PartialOrd + Sub<Self, Output = Duration> + Add<Duration, Output = Self>
{
}

impl<T> EchoInstant for T where
    T: Copy + PartialOrd + Sub<T, Output = Duration> + Add<Duration, Output = T>
{
}

/// Abstraction for the clock and delay operations the sensor needs.
pub trait EchoTimer {
    /// Monotonic instant type returned by [`now`](EchoTimer::now).
    type Instant: EchoInstant;

    /// Current monotonic time.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Blocks for at least `duration`.
    ///
    /// The default splits the duration into `delay_us` calls.
    fn sleep(&mut self, duration: Duration) {
        let mut remaining = duration.as_micros();
        while remaining > 0 {
            let chunk = remaining.min(u32::MAX as u128) as u32;
            self.delay_us(chunk);
            remaining -= chunk as u128;
        }
    }
}

/// Abstraction for the digital pins driving the sensor.
///
/// Pins are addressed by identifier; the sensor only ever touches the two it
/// was constructed with.
pub trait GpioPort {
    /// Pin identifier (e.g. a BCM pin number).
    type Pin: Copy + Debug + PartialEq;
    /// Associated error type for pin errors.
    type Error: Debug;

    /// Configures `pin` as a push-pull output.
    fn configure_output(&mut self, pin: Self::Pin) -> Result<(), Self::Error>;

    /// Configures `pin` as a digital input.
    fn configure_input(&mut self, pin: Self::Pin) -> Result<(), Self::Error>;

    /// Drives `pin` high (`true`) or low (`false`).
    fn write_digital(&mut self, pin: Self::Pin, high: bool) -> Result<(), Self::Error>;

    /// Reads the level of `pin`; `true` is high.
    fn read_digital(&mut self, pin: Self::Pin) -> Result<bool, Self::Error>;

    /// Returns `pin` to its reset state. The default does nothing.
    fn release(&mut self, _pin: Self::Pin) -> Result<(), Self::Error> {
        Ok(())
    }
}
