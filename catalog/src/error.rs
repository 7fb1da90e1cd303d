//! Error types for the course catalog
//!
//! This module defines error types for each layer:
//! - `EnrollmentError`: Catalog model errors raised while enrolling users
//! - `ConfigError`: Invalid configuration values read from the environment
//! - `ReportError`: Failures while rendering a course report

use thiserror::Error;

/// Catalog model errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    #[error("No users specified for enrollment.")]
    EmptyRegistration,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Report rendering errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
