//! Level domain entity
//!
//! Difficulty classification of a content unit or a whole course.

use std::cmp::Ordering;

use serde::Serialize;

/// Difficulty level, totally ordered from `Basic` to `Advanced`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    /// Ordinal rank used for comparisons
    pub fn rank(self) -> u8 {
        match self {
            Level::Basic => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Basic => write!(f, "BASIC"),
            Level::Intermediate => write!(f, "INTERMEDIATE"),
            Level::Advanced => write!(f, "ADVANCED"),
        }
    }
}
