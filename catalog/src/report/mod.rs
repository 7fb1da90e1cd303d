//! Report module
//!
//! Console rendering of course summaries.

pub mod renderer;

pub use renderer::{render_courses, ReportFormat};
