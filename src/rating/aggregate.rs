//! Cross-book aggregation of grades for one course.

use tracing::debug;

use crate::rating::error::RatingError;
use crate::rating::utility::{mean, round_to_tenth};
use crate::roster::GradeBook;

/// Combines the grades recorded for `course` across every book that
/// contains it and returns the mean rounded to one decimal place.
///
/// Aggregation is uniform over however many books carry the course; a
/// course found in exactly one book is handled the same as one found in
/// several, and permuting the books never changes the result.
///
/// # Errors
///
/// [`RatingError::CourseNotFound`] when the course appears in no book, and
/// [`RatingError::NoGradesRecorded`] when it appears but every entry is
/// empty. Both replace the divide-by-zero those inputs would otherwise hit.
pub fn course_average(course: &str, books: &[GradeBook]) -> Result<f64, RatingError> {
    let mut combined = Vec::new();
    let mut books_with_course = 0usize;

    for book in books {
        if let Some(grades) = book.get(course) {
            books_with_course += 1;
            combined.extend_from_slice(grades);
        }
    }

    if books_with_course == 0 {
        return Err(RatingError::CourseNotFound(course.to_string()));
    }

    debug!(course, books_with_course, grade_count = combined.len(), "Combined course grades");

    mean(&combined)
        .map(round_to_tenth)
        .ok_or_else(|| RatingError::NoGradesRecorded(course.to_string()))
}
