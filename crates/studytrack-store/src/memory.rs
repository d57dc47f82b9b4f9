use studytrack_core::{Course, Exam, ExamVariant};

use crate::store::{CourseStore, Deletion};
use crate::{Result, StoreError};

/// In-memory course store for testing.
///
/// Enforces the same rules as the SQLite store: unique course ids, exams only
/// for existing courses, and deletion removing a course's exams.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    courses: Vec<Course>,
    exams: Vec<Exam>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored exams, across all courses.
    pub fn exam_count(&self) -> usize {
        self.exams.len()
    }

    fn has_course(&self, course_id: &str) -> bool {
        self.courses.iter().any(|c| c.course_id() == course_id)
    }
}

impl CourseStore for InMemoryStore {
    fn load_courses(&self) -> Result<Vec<Course>> {
        Ok(self
            .courses
            .iter()
            .map(|c| Course::new(&c.name, c.course_id(), &c.description, c.ects, c.started_at))
            .collect())
    }

    fn load_exams(&self, variant: ExamVariant) -> Result<Vec<Exam>> {
        Ok(self
            .exams
            .iter()
            .filter(|e| e.variant() == variant)
            .cloned()
            .collect())
    }

    fn save_course(&mut self, course: &Course) -> Result<()> {
        if self.has_course(course.course_id()) {
            return Err(StoreError::DuplicateCourse(course.course_id().to_string()));
        }
        self.courses.push(course.clone());
        Ok(())
    }

    fn save_exam(&mut self, exam: &Exam) -> Result<()> {
        if !self.has_course(exam.course_id()) {
            return Err(StoreError::UnknownCourse(exam.course_id().to_string()));
        }
        self.exams.push(exam.clone());
        Ok(())
    }

    fn delete_course(&mut self, course_id: &str) -> Result<Deletion> {
        let courses_before = self.courses.len();
        let exams_before = self.exams.len();
        self.courses.retain(|c| c.course_id() != course_id);
        self.exams.retain(|e| e.course_id() != course_id);
        Ok(Deletion {
            course_removed: self.courses.len() < courses_before,
            exams_removed: exams_before - self.exams.len(),
        })
    }
}
