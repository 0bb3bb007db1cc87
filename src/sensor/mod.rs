// src/sensor/mod.rs

// Declare the modules within the sensor directory.
pub mod pulse_timer; // One trigger/echo cycle
pub mod range_sensor; // Public orchestrator: rest gate, averaging, calibration

// Scripted port used by the unit tests
#[cfg(test)]
mod mock;

// --- Public Re-exports ---
pub use pulse_timer::{EchoPhase, EchoPulse, PulseTimer};
pub use range_sensor::RangeSensor;
