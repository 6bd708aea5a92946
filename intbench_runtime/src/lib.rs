#![forbid(unsafe_code)]

//! intbench runtime
//!
//! Drives the frozen kernel in a timed chain, formats the console
//! report, and verifies results. No numeric logic lives here; every
//! step is delegated to `intbench_kernel`.

pub mod variant;
pub mod clock;
pub mod driver;
pub mod report;
pub mod verify;
pub mod error;
pub mod telemetry;
