// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(feature = "std")]
extern crate std;

pub mod common;
pub mod sensor;

// Re-export key types for convenience
pub use common::{ConfigError, EchoConfig, EchoError, ErrorCode, Unit};
pub use sensor::RangeSensor;
