//! Campus roster: the people exchanging grades and their grade books.
//!
//! Averaging lives in [`crate::rating`] as free functions; the records here
//! call into it rather than inheriting shared behavior.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rating::average::book_average;
use crate::rating::error::RatingError;

/// Course name mapped to the ordered grades recorded for it. Entries are
/// appended to and never removed.
pub type GradeBook = BTreeMap<String, Vec<f64>>;

/// Shared identity for everyone on the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub surname: String,
    pub gender: String,
}

impl PersonInfo {
    /// # Errors
    ///
    /// Returns [`RatingError::BlankName`] if name or surname is blank.
    pub fn new(name: &str, surname: &str, gender: &str) -> Result<Self, RatingError> {
        if name.trim().is_empty() || surname.trim().is_empty() {
            return Err(RatingError::BlankName);
        }
        Ok(Self {
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            gender: gender.trim().to_string(),
        })
    }

    pub fn fullname(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Anything with a grade book that can be averaged and compared.
pub trait Rated {
    fn fullname(&self) -> String;

    fn grade_book(&self) -> &GradeBook;

    /// Mean of every grade in the book, rounded to one decimal place, or
    /// `None` when nothing has been recorded yet.
    fn average(&self) -> Option<f64> {
        book_average(self.grade_book())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub info: PersonInfo,
    pub finished_courses: Vec<String>,
    pub courses_in_progress: Vec<String>,
    pub grades: GradeBook,
}

impl Student {
    pub fn new(info: PersonInfo) -> Self {
        Self {
            info,
            finished_courses: Vec::new(),
            courses_in_progress: Vec::new(),
            grades: GradeBook::new(),
        }
    }

    pub fn enroll(&mut self, course: &str) {
        self.courses_in_progress.push(course.to_string());
    }

    pub fn finish(&mut self, course: &str) {
        self.finished_courses.push(course.to_string());
    }

    pub fn is_taking(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    /// Records the student's grade for a lecturer's course.
    ///
    /// # Errors
    ///
    /// [`RatingError::NotAttached`] if the lecturer does not teach the
    /// course, [`RatingError::NotEnrolled`] if the student is not taking it.
    pub fn rate_lecturer(
        &self,
        lecturer: &mut Lecturer,
        course: &str,
        grade: f64,
    ) -> Result<(), RatingError> {
        if !lecturer.is_attached(course) {
            return Err(RatingError::NotAttached {
                person: lecturer.info.fullname(),
                course: course.to_string(),
            });
        }
        if !self.is_taking(course) {
            return Err(RatingError::NotEnrolled {
                person: self.info.fullname(),
                course: course.to_string(),
            });
        }

        lecturer.grades.entry(course.to_string()).or_default().push(grade);
        Ok(())
    }
}

impl Rated for Student {
    fn fullname(&self) -> String {
        self.info.fullname()
    }

    fn grade_book(&self) -> &GradeBook {
        &self.grades
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    pub info: PersonInfo,
    pub courses_attached: Vec<String>,
    pub grades: GradeBook,
}

impl Lecturer {
    pub fn new(info: PersonInfo) -> Self {
        Self {
            info,
            courses_attached: Vec::new(),
            grades: GradeBook::new(),
        }
    }

    pub fn attach(&mut self, course: &str) {
        self.courses_attached.push(course.to_string());
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }
}

impl Rated for Lecturer {
    fn fullname(&self) -> String {
        self.info.fullname()
    }

    fn grade_book(&self) -> &GradeBook {
        &self.grades
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reviewer {
    pub info: PersonInfo,
    pub courses_attached: Vec<String>,
}

impl Reviewer {
    pub fn new(info: PersonInfo) -> Self {
        Self {
            info,
            courses_attached: Vec::new(),
        }
    }

    pub fn attach(&mut self, course: &str) {
        self.courses_attached.push(course.to_string());
    }

    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }

    /// Records homework grades for a student, one per session.
    ///
    /// # Errors
    ///
    /// [`RatingError::NotAttached`] if the reviewer does not cover the
    /// course, [`RatingError::NotEnrolled`] if the student is not taking it.
    pub fn rate_student(
        &self,
        student: &mut Student,
        course: &str,
        grades: &[f64],
    ) -> Result<(), RatingError> {
        if !self.is_attached(course) {
            return Err(RatingError::NotAttached {
                person: self.info.fullname(),
                course: course.to_string(),
            });
        }
        if !student.is_taking(course) {
            return Err(RatingError::NotEnrolled {
                person: student.info.fullname(),
                course: course.to_string(),
            });
        }

        student
            .grades
            .entry(course.to_string())
            .or_default()
            .extend_from_slice(grades);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, surname: &str) -> PersonInfo {
        PersonInfo::new(name, surname, "Female").unwrap()
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = PersonInfo::new("  ", "Sokolova", "Female").unwrap_err();
        assert_eq!(err, RatingError::BlankName);
    }

    #[test]
    fn test_fullname_trims_parts() {
        let info = PersonInfo::new(" Evelina ", " Sokolova ", "Female").unwrap();
        assert_eq!(info.fullname(), "Evelina Sokolova");
    }

    #[test]
    fn test_rate_student_appends_not_replaces() {
        let mut student = Student::new(info("Evelina", "Sokolova"));
        student.enroll("Python");

        let mut reviewer = Reviewer::new(info("Maxim", "Romanoff"));
        reviewer.attach("Python");

        reviewer.rate_student(&mut student, "Python", &[10.0, 10.0]).unwrap();
        reviewer.rate_student(&mut student, "Python", &[8.0]).unwrap();

        assert_eq!(student.grades["Python"], vec![10.0, 10.0, 8.0]);
    }

    #[test]
    fn test_rate_student_requires_enrollment() {
        let mut student = Student::new(info("Sergey", "Makarov"));

        let mut reviewer = Reviewer::new(info("Maxim", "Romanoff"));
        reviewer.attach("Python");

        let err = reviewer.rate_student(&mut student, "Python", &[9.0]).unwrap_err();
        assert_eq!(
            err,
            RatingError::NotEnrolled {
                person: "Sergey Makarov".to_string(),
                course: "Python".to_string(),
            }
        );
        assert!(student.grades.is_empty());
    }

    #[test]
    fn test_rate_student_requires_reviewer_attachment() {
        let mut student = Student::new(info("Sergey", "Makarov"));
        student.enroll("Git");

        let reviewer = Reviewer::new(info("Maxim", "Romanoff"));

        let err = reviewer.rate_student(&mut student, "Git", &[9.0]).unwrap_err();
        assert_eq!(
            err,
            RatingError::NotAttached {
                person: "Maxim Romanoff".to_string(),
                course: "Git".to_string(),
            }
        );
    }

    #[test]
    fn test_rate_lecturer() {
        let mut student = Student::new(info("Evelina", "Sokolova"));
        student.enroll("Python");

        let mut lecturer = Lecturer::new(info("Oleg", "Temnov"));
        lecturer.attach("Python");

        student.rate_lecturer(&mut lecturer, "Python", 10.0).unwrap();
        student.rate_lecturer(&mut lecturer, "Python", 7.0).unwrap();

        assert_eq!(lecturer.grades["Python"], vec![10.0, 7.0]);
        assert_eq!(lecturer.average(), Some(8.5));
    }

    #[test]
    fn test_rate_lecturer_not_attached() {
        let mut student = Student::new(info("Evelina", "Sokolova"));
        student.enroll("Git");

        let mut lecturer = Lecturer::new(info("Dmitry", "Okunev"));

        let err = student.rate_lecturer(&mut lecturer, "Git", 8.0).unwrap_err();
        assert!(matches!(err, RatingError::NotAttached { .. }));
    }

    #[test]
    fn test_student_average_spans_courses() {
        let mut student = Student::new(info("Evelina", "Sokolova"));
        student.enroll("Git");
        student.enroll("Python");

        let mut reviewer = Reviewer::new(info("Maxim", "Romanoff"));
        reviewer.attach("Git");
        reviewer.attach("Python");

        reviewer.rate_student(&mut student, "Git", &[8.0, 7.0]).unwrap();
        reviewer.rate_student(&mut student, "Python", &[10.0, 10.0, 8.0]).unwrap();

        assert_eq!(student.average(), Some(8.6));
    }

    #[test]
    fn test_average_before_any_grades_is_none() {
        let student = Student::new(info("Evelina", "Sokolova"));
        assert_eq!(student.average(), None);
    }
}
