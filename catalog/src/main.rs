//! Formação catalog
//!
//! Models courses built from timed content units, computes their overall
//! level and duration, and enrolls users into them.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod error;
mod report;

#[cfg(test)]
mod test_utils;

use config::Config;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,formacao_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::debug!(format = %config.report_format, "Configuration loaded");

    let outcome = app::run_demo();

    let mut courses = vec![&outcome.course];
    if config.show_failed_course {
        courses.push(&outcome.failed_course);
    }

    let rendered = report::render_courses(&courses, config.report_format)?;
    print!("{}", rendered);

    Ok(())
}
