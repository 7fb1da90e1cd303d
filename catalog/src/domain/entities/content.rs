//! Content unit domain entity
//!
//! A named, timed learning item with an associated level.

use super::level::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUnit {
    pub name: String,
    pub duration_min: u32,
    pub level: Level,
}

impl ContentUnit {
    pub fn new(name: impl Into<String>, duration_min: u32, level: Level) -> Self {
        Self {
            name: name.into(),
            duration_min,
            level,
        }
    }
}
