use thiserror::Error;

/// Failures surfaced by the rating pipeline and roster operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RatingError {
    /// The course appears in none of the consulted grade books.
    #[error("course `{0}` is not present in any grade book")]
    CourseNotFound(String),

    /// The course appears in at least one book, but no grades were
    /// recorded under it. Kept distinct from [`RatingError::CourseNotFound`]
    /// so callers never see a division by zero dressed up as a result.
    #[error("course `{0}` has no grades recorded yet")]
    NoGradesRecorded(String),

    /// A student was rated (or tried to rate) for a course they are not taking.
    #[error("`{person}` is not enrolled in `{course}`")]
    NotEnrolled { person: String, course: String },

    /// A reviewer or lecturer is not attached to the course in question.
    #[error("`{person}` is not attached to `{course}`")]
    NotAttached { person: String, course: String },

    /// A comparison was requested for someone with an empty grade book.
    #[error("`{person}` has no grades yet, average unavailable")]
    AverageUnavailable { person: String },

    #[error("name and surname must be non-blank")]
    BlankName,
}
