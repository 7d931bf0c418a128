//! Output formatting and persistence for rating results.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::rating::course_average;
use crate::roster::{GradeBook, Rated};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One row summarizing a person's standing: identity, role, rounded
/// average, and the courses their grade book covers. An absent average
/// serializes as an empty CSV cell, never as a fake number.
#[derive(Debug, Serialize)]
pub struct RatingSummary {
    pub fullname: String,
    pub role: String,
    pub average: Option<f64>,
    pub courses: String,
}

impl RatingSummary {
    pub fn from_rated<R: Rated>(person: &R, role: &str) -> Self {
        let courses: Vec<&str> = person.grade_book().keys().map(String::as_str).collect();
        Self {
            fullname: person.fullname(),
            role: role.to_string(),
            average: person.average(),
            courses: courses.join(", "),
        }
    }
}

/// Aggregation result for one course across a set of grade books,
/// serialized as JSON by the `course` subcommand.
#[derive(Debug, Serialize)]
pub struct CourseReport {
    pub generated_at: DateTime<Utc>,
    pub course: String,
    pub average: f64,
    pub books_consulted: usize,
}

impl CourseReport {
    /// Runs the aggregation and wraps the result with provenance.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::rating::RatingError`] from the aggregation.
    pub fn build(course: &str, books: &[GradeBook]) -> Result<Self> {
        let average = course_average(course, books)?;
        let books_consulted = books.iter().filter(|b| b.contains_key(course)).count();

        Ok(Self {
            generated_at: Utc::now(),
            course: course.to_string(),
            average,
            books_consulted,
        })
    }
}

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RatingSummary) {
    debug!("{:#?}", summary);
}

/// Logs a summary as pretty-printed JSON.
pub fn print_json(summary: &RatingSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Appends a [`RatingSummary`] record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_summary(path: &str, summary: &RatingSummary) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
