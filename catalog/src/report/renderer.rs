//! Course renderer
//!
//! Renders course summaries as plain text or JSON.

use serde::Serialize;

use crate::domain::entities::{Course, Level};
use crate::error::ReportError;

const SEPARATOR: &str = "--------------------------------";

/// Output format for [`render_courses`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Snapshot of a course with its derived values computed
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary<'a> {
    pub name: &'a str,
    pub contents: Vec<ContentLine<'a>>,
    pub declared_levels: &'a [Level],
    pub level: Level,
    pub duration_min: u64,
    pub enrolled: Vec<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentLine<'a> {
    pub name: &'a str,
    pub level: Level,
}

impl<'a> From<&'a Course> for CourseSummary<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            name: course.name(),
            contents: course
                .contents()
                .iter()
                .map(|c| ContentLine {
                    name: &c.name,
                    level: c.level,
                })
                .collect(),
            declared_levels: course.levels(),
            level: course.aggregate_level(),
            duration_min: course.total_duration(),
            enrolled: course.enrolled().iter().map(|u| u.name.as_str()).collect(),
        }
    }
}

/// Render one or more courses in the requested format
pub fn render_courses(courses: &[&Course], format: ReportFormat) -> Result<String, ReportError> {
    let summaries: Vec<CourseSummary<'_>> =
        courses.iter().map(|c| CourseSummary::from(*c)).collect();

    match format {
        ReportFormat::Text => Ok(summaries
            .iter()
            .map(render_summary)
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&summaries)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_summary(summary: &CourseSummary<'_>) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("Course: {}\n", summary.name));
    buf.push_str(SEPARATOR);
    buf.push('\n');

    buf.push_str("Contents:\n");
    for content in &summary.contents {
        buf.push_str(&format!("- {} (Level: {})\n", content.name, content.level));
    }
    buf.push_str(SEPARATOR);
    buf.push('\n');

    buf.push_str(&format!("Course level: {}\n", summary.level));
    buf.push_str(&format!("Course duration: {}min\n", summary.duration_min));
    buf.push_str(SEPARATOR);
    buf.push('\n');

    buf.push_str("Enrolled users:\n");
    for name in &summary.enrolled {
        buf.push_str(&format!("- {}\n", name));
    }

    buf
}
