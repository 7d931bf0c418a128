//! Comparison of two rated people by average grade.
//!
//! The ordering and its human-readable rendering are kept separate: the
//! [`Comparison`] struct carries the structured outcome, and its `Display`
//! impl produces the verdict sentence.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::rating::error::RatingError;
use crate::roster::Rated;

/// Structured outcome of comparing two people's rounded averages.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub left_name: String,
    pub left_average: f64,
    pub right_name: String,
    pub right_average: f64,
    #[serde(skip)]
    pub ordering: Ordering,
}

impl Comparison {
    pub fn left_outperforms(&self) -> bool {
        self.ordering == Ordering::Greater
    }

    pub fn is_tie(&self) -> bool {
        self.ordering == Ordering::Equal
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordering {
            Ordering::Greater => write!(
                f,
                "{} ({}) outperforms {} ({})",
                self.left_name, self.left_average, self.right_name, self.right_average
            ),
            Ordering::Less => write!(
                f,
                "{} ({}) outperforms {} ({})",
                self.right_name, self.right_average, self.left_name, self.left_average
            ),
            Ordering::Equal => write!(
                f,
                "{} and {} perform equally with an average of {}",
                self.left_name, self.right_name, self.left_average
            ),
        }
    }
}

/// Compares two rated people by their rounded average grade.
///
/// # Errors
///
/// [`RatingError::AverageUnavailable`] when either side has an empty grade
/// book; an absent average is not comparable to a numeric one.
pub fn compare<R: Rated>(left: &R, right: &R) -> Result<Comparison, RatingError> {
    let left_average = left.average().ok_or_else(|| RatingError::AverageUnavailable {
        person: left.fullname(),
    })?;
    let right_average = right.average().ok_or_else(|| RatingError::AverageUnavailable {
        person: right.fullname(),
    })?;

    // Rounded averages are exact tenths, so total_cmp has no NaN to worry about.
    Ok(Comparison {
        left_name: left.fullname(),
        left_average,
        right_name: right.fullname(),
        right_average,
        ordering: left_average.total_cmp(&right_average),
    })
}
