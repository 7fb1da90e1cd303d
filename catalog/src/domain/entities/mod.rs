//! Domain entities
//!
//! Pure domain models for the course catalog.

pub mod content;
pub mod course;
pub mod level;
pub mod user;

pub use content::ContentUnit;
pub use course::Course;
pub use level::Level;
pub use user::User;
