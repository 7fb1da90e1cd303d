//! Course domain entity
//!
//! A named bundle of content units plus enrollment tracking.

use super::content::ContentUnit;
use super::level::Level;
use super::user::User;
use crate::error::EnrollmentError;

/// A course ("formação") and the users enrolled in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    contents: Vec<ContentUnit>,
    /// Declared levels; not checked against `contents`
    levels: Vec<Level>,
    /// Append-only
    enrolled: Vec<User>,
}

impl Course {
    pub fn new(name: impl Into<String>, contents: Vec<ContentUnit>, levels: Vec<Level>) -> Self {
        Self {
            name: name.into(),
            contents,
            levels,
            enrolled: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &[ContentUnit] {
        &self.contents
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn enrolled(&self) -> &[User] {
        &self.enrolled
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Highest level among the content units, `Basic` when there are none
    pub fn aggregate_level(&self) -> Level {
        self.contents
            .iter()
            .map(|c| c.level)
            .max()
            .unwrap_or_default()
    }

    /// Sum of every content unit's duration in minutes
    pub fn total_duration(&self) -> u64 {
        self.contents
            .iter()
            .map(|c| u64::from(c.duration_min))
            .sum()
    }

    /// Enroll users, returning an error instead of logging it.
    ///
    /// On error the enrolled list is left untouched.
    pub fn try_enroll(&mut self, users: &[User]) -> Result<(), EnrollmentError> {
        if users.is_empty() {
            return Err(EnrollmentError::EmptyRegistration);
        }

        self.enrolled.extend_from_slice(users);
        tracing::debug!(
            course = %self.name,
            added = users.len(),
            total = self.enrolled_count(),
            "Enrolled users"
        );
        Ok(())
    }

    /// Enroll users in the order given.
    ///
    /// An empty call is reported to the log and otherwise ignored; callers
    /// that need to observe the failure should use [`Course::try_enroll`].
    pub fn enroll(&mut self, users: &[User]) {
        if let Err(e) = self.try_enroll(users) {
            tracing::warn!(course = %self.name, "Failed to enroll users: {}", e);
        }
    }
}
