//! Demonstration routine
//!
//! Builds two courses over the same Kotlin contents, enrolls three users in
//! the first and nobody in the second.

use crate::domain::entities::{ContentUnit, Course, Level, User};

/// Courses produced by [`run_demo`]
#[derive(Debug)]
pub struct DemoOutcome {
    /// Course enrolled with the sample users
    pub course: Course,
    /// Course whose enrollment was rejected
    pub failed_course: Course,
}

/// Kotlin track contents
pub fn sample_contents() -> Vec<ContentUnit> {
    vec![
        ContentUnit::new("Introduction to Kotlin", 60, Level::Basic),
        ContentUnit::new("Object-Oriented Programming in Kotlin", 100, Level::Intermediate),
        ContentUnit::new("Exception Handling in Kotlin", 120, Level::Intermediate),
    ]
}

pub fn run_demo() -> DemoOutcome {
    let users = [
        User::new("Caio"),
        User::new("Elidiane"),
        User::new("Venilton"),
    ];

    let contents = sample_contents();
    let levels = vec![Level::Basic, Level::Intermediate];

    let mut course = Course::new("Kotlin", contents.clone(), levels.clone());
    let mut failed_course = Course::new("KotlinTest", contents, levels);

    tracing::info!(course = course.name(), "Enrolling sample users");
    course.enroll(&users);

    // Exercises the empty-registration path
    tracing::info!(course = failed_course.name(), "Enrolling no users");
    failed_course.enroll(&[]);

    DemoOutcome {
        course,
        failed_course,
    }
}
