// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod convert;
pub mod error;
pub mod hal_traits;
pub mod status;
pub mod timing;
pub mod unit;

#[cfg(feature = "impl-generic-hal")]
pub mod hal_adapter;
#[cfg(feature = "std")]
pub mod std_timer;

// --- Re-export key types/traits for easier access ---

// From config.rs
pub use config::EchoConfig;

// From error.rs
pub use error::{ConfigError, EchoError};

// From hal_traits.rs
pub use hal_traits::{EchoInstant, EchoTimer, GpioPort};

// From status.rs
pub use status::ErrorCode;

// From unit.rs
pub use unit::Unit;

// From timing.rs (constants - users can access via common::timing::*)

// --- Feature-gated re-exports ---

#[cfg(feature = "impl-generic-hal")]
pub use hal_adapter::{EchoLine, HalPort, HalPortError, MonotonicClock};

#[cfg(feature = "std")]
pub use std_timer::StdTimer;
