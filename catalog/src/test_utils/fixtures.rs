//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{ContentUnit, Course, Level, User};

/// The three Kotlin content units used throughout the tests (280 minutes total)
pub fn kotlin_contents() -> Vec<ContentUnit> {
    vec![
        ContentUnit::new("Intro", 60, Level::Basic),
        ContentUnit::new("OOP", 100, Level::Intermediate),
        ContentUnit::new("Exceptions", 120, Level::Intermediate),
    ]
}

/// Create a test course with the Kotlin contents and no enrollments
pub fn test_course(name: &str) -> Course {
    Course::new(
        name,
        kotlin_contents(),
        vec![Level::Basic, Level::Intermediate],
    )
}

/// Create the three sample users
pub fn test_users() -> Vec<User> {
    vec![
        User::new("Caio"),
        User::new("Elidiane"),
        User::new("Venilton"),
    ]
}
