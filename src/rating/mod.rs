//! Grade averaging, cross-book aggregation, and comparison.
//!
//! Everything here is a pure function of its inputs: no shared state, no
//! I/O, safe to call from any thread.

pub mod aggregate;
pub mod average;
pub mod compare;
pub mod error;
pub mod utility;

pub use aggregate::course_average;
pub use average::{GradeRecord, average, book_average};
pub use compare::{Comparison, compare};
pub use error::RatingError;
