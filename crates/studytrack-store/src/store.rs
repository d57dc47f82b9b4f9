use studytrack_core::{Course, Exam, ExamVariant, Student};
use tracing::{debug, warn};

use crate::Result;

/// What a course deletion removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deletion {
    /// Whether a course with the id existed.
    pub course_removed: bool,
    /// Exam records removed along with the course.
    pub exams_removed: usize,
}

/// Core trait for course storage.
///
/// Records are only ever appended or deleted, never updated in place.
pub trait CourseStore {
    /// All courses in insertion order, without their exams.
    fn load_courses(&self) -> Result<Vec<Course>>;

    /// All exams of one kind, in insertion order.
    fn load_exams(&self, variant: ExamVariant) -> Result<Vec<Exam>>;

    /// Inserts a new course row. Fails with `DuplicateCourse` if the id is
    /// taken. Exams held by `course` are not written.
    fn save_course(&mut self, course: &Course) -> Result<()>;

    /// Appends an exam. Fails with `UnknownCourse` if its course does not exist.
    /// Identical exams may be stored more than once.
    fn save_exam(&mut self, exam: &Exam) -> Result<()>;

    /// Deletes a course together with its exams.
    fn delete_course(&mut self, course_id: &str) -> Result<Deletion>;
}

/// Extension trait providing the joined, full-reload view of a store.
pub trait CourseStoreExt: CourseStore {
    /// Loads every course with its exams attached.
    ///
    /// A course's attempts keep storage order: all workbooks, then all class
    /// tests, each in the order they were saved. The `written_on` date plays
    /// no part in the order.
    fn load_all_courses(&self) -> Result<Vec<Course>> {
        let mut courses = self.load_courses()?;

        let mut exams = Vec::new();
        for variant in ExamVariant::ALL {
            exams.extend(self.load_exams(variant)?);
        }

        for exam in exams {
            match courses
                .iter_mut()
                .find(|c| c.course_id() == exam.course_id())
            {
                Some(course) => course.record_exam(exam)?,
                None => warn!(course_id = exam.course_id(), "skipping exam of unknown course"),
            }
        }

        debug!(courses = courses.len(), "loaded all courses");
        Ok(courses)
    }

    /// Checks whether a course with this id is stored.
    fn contains_course(&self, course_id: &str) -> Result<bool> {
        Ok(self
            .load_courses()?
            .iter()
            .any(|c| c.course_id() == course_id))
    }

    /// Replaces the student's course collection with a fresh full load.
    fn reload_student(&self, student: &mut Student) -> Result<()> {
        student.replace_courses(self.load_all_courses()?);
        Ok(())
    }
}

// Blanket implementation for all CourseStore implementations
impl<T: CourseStore + ?Sized> CourseStoreExt for T {}
