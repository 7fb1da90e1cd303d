use std::env;

use crate::error::ConfigError;
use crate::report::ReportFormat;

#[derive(Debug, Clone)]
pub struct Config {
    /// Output format for the course report
    pub report_format: ReportFormat,
    /// Also print the course whose enrollment was rejected
    pub show_failed_course: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("CATALOG_REPORT_FORMAT").ok().as_deref(),
            env::var("CATALOG_SHOW_FAILED_COURSE").ok().as_deref(),
        )
    }

    fn from_vars(
        report_format: Option<&str>,
        show_failed_course: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let report_format = match report_format {
            Some(raw) => {
                raw.parse::<ReportFormat>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "CATALOG_REPORT_FORMAT",
                        value: raw.to_string(),
                    })?
            }
            None => ReportFormat::default(),
        };

        let show_failed_course = match show_failed_course {
            Some(raw) => parse_bool(raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "CATALOG_SHOW_FAILED_COURSE",
                value: raw.to_string(),
            })?,
            None => false,
        };

        Ok(Self {
            report_format,
            show_failed_course,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
