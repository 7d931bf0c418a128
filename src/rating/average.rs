//! Flattening and averaging of grade records.

use serde::{Deserialize, Serialize};

use crate::rating::utility::{mean, round_to_tenth};
use crate::roster::GradeBook;

/// One recorded evaluation: either a single grade or the per-session
/// grades for one course. The untagged representation lets JSON carry
/// `7` and `[7, 8]` interchangeably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeRecord {
    Single(f64),
    Series(Vec<f64>),
}

impl GradeRecord {
    /// The record's grades as a flat slice; a single grade behaves like a
    /// one-element series.
    pub fn grades(&self) -> &[f64] {
        match self {
            GradeRecord::Single(g) => std::slice::from_ref(g),
            GradeRecord::Series(gs) => gs,
        }
    }
}

impl From<f64> for GradeRecord {
    fn from(g: f64) -> Self {
        GradeRecord::Single(g)
    }
}

impl From<Vec<f64>> for GradeRecord {
    fn from(gs: Vec<f64>) -> Self {
        GradeRecord::Series(gs)
    }
}

/// Flattens the records into one grade sequence and returns the mean
/// rounded to one decimal place (half away from zero).
///
/// Returns `None` when the flattened sequence is empty, so "no grades yet"
/// can never collide with a computed average downstream.
pub fn average(records: &[GradeRecord]) -> Option<f64> {
    let flattened: Vec<f64> = records.iter().flat_map(|r| r.grades().iter().copied()).collect();

    mean(&flattened).map(round_to_tenth)
}

/// Averages every grade in a book, across all of its courses.
pub fn book_average(book: &GradeBook) -> Option<f64> {
    let flattened: Vec<f64> = book.values().flatten().copied().collect();

    mean(&flattened).map(round_to_tenth)
}
