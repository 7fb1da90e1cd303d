//! Application layer
//!
//! Use cases that drive the catalog model.

pub mod demo;

pub use demo::run_demo;
