// src/common/timing.rs

use core::time::Duration;

// Nominal HC-SR04 style timing. The sensor datasheets recommend a measurement
// cycle of at least 60 ms so that stray echoes from the previous burst have
// died out before the next trigger.

// === Trigger ===

/// Width of the trigger pulse. Fixed, not configurable.
pub const TRIGGER_PULSE_WIDTH: Duration = Duration::from_micros(10);
/// Settle time after configuring the pins, before the priming pulse.
pub const POWER_ON_SETTLE: Duration = Duration::from_millis(500);

// === Measurement cycle ===

/// Default minimum idle time between trigger activations.
pub const DEFAULT_REST_INTERVAL: Duration = Duration::from_millis(60);
/// Default maximum wait for the echo pin to rise after triggering.
pub const DEFAULT_TRIGGER_TIMEOUT: Duration = Duration::from_millis(60);
/// Default extra time added to the echo timeout to absorb jitter.
pub const DEFAULT_ECHO_RETURN_OFFSET: Duration = Duration::from_micros(670);

// === Echo window heuristic ===

/// Round-trip multiplier for the default echo window: `(1 / speed) * 6`
/// covers a 3 m scan range (3 m out, 3 m back).
pub const DEFAULT_ECHO_WINDOW_FACTOR: f64 = 6.0;

// === Physics ===

/// Default speed of sound in dry air at ~20 °C, in metres per second.
pub const DEFAULT_SPEED_OF_SOUND: f64 = 343.0;
