//! Test utilities
//!
//! Fixture factories and log capture shared by the unit tests.

pub mod fixtures;
pub mod logs;

pub use fixtures::*;
pub use logs::capture_logs;
