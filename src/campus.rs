//! Sample campus construction and grade-book file loading.
//!
//! The demo roster is built by an explicit constructor rather than as a
//! module-load side effect, so the rating core stays free of globals.

use anyhow::Result;

use crate::rating::error::RatingError;
use crate::roster::{GradeBook, Lecturer, PersonInfo, Rated, Reviewer, Student};

/// The full demo roster: everyone holding or filling a grade book.
pub struct Campus {
    pub students: Vec<Student>,
    pub lecturers: Vec<Lecturer>,
    pub reviewers: Vec<Reviewer>,
}

impl Campus {
    /// Clones of every student's grade book, for cross-book aggregation.
    pub fn student_books(&self) -> Vec<GradeBook> {
        self.students.iter().map(|s| s.grade_book().clone()).collect()
    }

    /// Clones of every lecturer's grade book.
    pub fn lecturer_books(&self) -> Vec<GradeBook> {
        self.lecturers.iter().map(|l| l.grade_book().clone()).collect()
    }
}

/// Builds the scripted demo campus: two students taking Git and Python,
/// two lecturers, and two reviewers, with all sample ratings applied.
pub fn sample_campus() -> Result<Campus, RatingError> {
    let mut evelina = Student::new(PersonInfo::new("Evelina", "Sokolova", "Female")?);
    let mut sergey = Student::new(PersonInfo::new("Sergey", "Makarov", "Male")?);
    for student in [&mut evelina, &mut sergey] {
        student.finish("Introduction");
        student.finish("Python Basics");
        student.enroll("Git");
        student.enroll("Python");
    }

    let mut maxim = Reviewer::new(PersonInfo::new("Maxim", "Romanoff", "Male")?);
    maxim.attach("Python");
    let mut garik = Reviewer::new(PersonInfo::new("Garik", "Dobry", "Male")?);
    garik.attach("Git");

    let mut oleg = Lecturer::new(PersonInfo::new("Oleg", "Temnov", "Male")?);
    oleg.attach("Git");
    oleg.attach("Python");
    let mut dima = Lecturer::new(PersonInfo::new("Dmitry", "Okunev", "Male")?);
    dima.attach("Python");

    // Homework grades, one entry per session
    garik.rate_student(&mut evelina, "Git", &[8.0, 7.0])?;
    maxim.rate_student(&mut evelina, "Python", &[10.0, 10.0, 8.0])?;
    garik.rate_student(&mut sergey, "Git", &[6.0, 8.0])?;
    maxim.rate_student(&mut sergey, "Python", &[9.0, 10.0, 7.0])?;

    // Lecture grades
    evelina.rate_lecturer(&mut oleg, "Git", 8.0)?;
    evelina.rate_lecturer(&mut oleg, "Python", 10.0)?;
    evelina.rate_lecturer(&mut dima, "Python", 9.0)?;
    sergey.rate_lecturer(&mut oleg, "Git", 5.0)?;
    sergey.rate_lecturer(&mut oleg, "Python", 7.0)?;
    sergey.rate_lecturer(&mut dima, "Python", 8.0)?;

    Ok(Campus {
        students: vec![evelina, sergey],
        lecturers: vec![oleg, dima],
        reviewers: vec![maxim, garik],
    })
}

/// Loads grade books from a JSON file: an array of objects mapping course
/// name to a grade list.
///
/// ```json
/// [
///   { "Python": [10, 10, 8] },
///   { "Python": [9, 10, 7], "Git": [6, 8] }
/// ]
/// ```
pub fn load_books(path: &str) -> Result<Vec<GradeBook>> {
    let content = std::fs::read_to_string(path)?;
    let books: Vec<GradeBook> = serde_json::from_str(&content)?;
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_campus_builds() {
        let campus = sample_campus().unwrap();
        assert_eq!(campus.students.len(), 2);
        assert_eq!(campus.lecturers.len(), 2);
        assert_eq!(campus.reviewers.len(), 2);
    }

    #[test]
    fn test_sample_campus_grades_match_script() {
        let campus = sample_campus().unwrap();

        let evelina = &campus.students[0];
        assert_eq!(evelina.grades["Git"], vec![8.0, 7.0]);
        assert_eq!(evelina.grades["Python"], vec![10.0, 10.0, 8.0]);
        assert_eq!(evelina.average(), Some(8.6));

        let sergey = &campus.students[1];
        assert_eq!(sergey.average(), Some(8.0));

        let oleg = &campus.lecturers[0];
        assert_eq!(oleg.grades["Git"], vec![8.0, 5.0]);
        assert_eq!(oleg.average(), Some(7.5));

        let dima = &campus.lecturers[1];
        assert_eq!(dima.grades["Python"], vec![9.0, 8.0]);
        assert_eq!(dima.average(), Some(8.5));
    }

    #[test]
    fn test_load_books_roundtrip() {
        let path = format!(
            "{}/course_rater_test_books.json",
            std::env::temp_dir().display()
        );
        std::fs::write(&path, r#"[{"Python":[10,10,8]},{"Python":[9,10,7]}]"#).unwrap();

        let books = load_books(&path).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0]["Python"], vec![10.0, 10.0, 8.0]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_books_missing_file() {
        assert!(load_books("/nonexistent/books.json").is_err());
    }
}
