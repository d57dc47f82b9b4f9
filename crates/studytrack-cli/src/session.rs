//! One running studytrack session: configuration, storage and the student.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use studytrack_core::{
    load_config_from, Course, Exam, GradingPolicy, ProgressEvaluator, Student, StudyTrackConfig,
};
use studytrack_store::{
    seed_demo_data, CourseStore, CourseStoreExt, Deletion, SqliteStore, StoreError,
};
use tracing::{debug, info};

/// Everything a command needs, built once at start-up.
///
/// Every write goes through the session and is followed by a full reload of
/// the student, so `student` always mirrors storage.
pub struct Session {
    pub config: StudyTrackConfig,
    pub store: SqliteStore,
    pub student: Student,
    /// Whether this session created the database schema.
    pub setup_ran: bool,
}

impl Session {
    /// Loads configuration, opens the database and reloads the student.
    pub fn open(config_path: Option<&Path>, database: Option<PathBuf>) -> Result<Self> {
        let mut config = load_config_from(config_path)?;
        if let Some(database) = database {
            config.database = database;
        }

        let store = SqliteStore::open(&config.database)
            .with_context(|| format!("failed to open database {}", config.database.display()))?;
        Self::with_store(config, store)
    }

    /// Sets up the schema (seeding demo data on first run) and loads the student.
    pub fn with_store(config: StudyTrackConfig, mut store: SqliteStore) -> Result<Self> {
        let setup_ran = store.initialize().context("failed to set up database schema")?;
        if setup_ran && config.seed_demo_data {
            seed_demo_data(&mut store).context("failed to write demo data")?;
        }

        let mut student = Student::new(config.student.clone());
        store.reload_student(&mut student)?;
        info!(
            courses = student.courses().len(),
            setup_ran, "session ready"
        );

        Ok(Self {
            config,
            store,
            student,
            setup_ran,
        })
    }

    pub fn policy(&self) -> &GradingPolicy {
        &self.config.grading
    }

    pub fn evaluator(&self) -> ProgressEvaluator<'_> {
        ProgressEvaluator::new(&self.student, &self.config.grading)
    }

    pub fn reload(&mut self) -> Result<()> {
        self.store.reload_student(&mut self.student)?;
        debug!(courses = self.student.courses().len(), "reloaded student");
        Ok(())
    }

    /// Stores a new course. Returns `false` without writing anything when a
    /// course with the same id is already tracked.
    pub fn create_course(&mut self, course: &Course) -> Result<bool> {
        match self.store.save_course(course) {
            Ok(()) => {}
            Err(StoreError::DuplicateCourse(course_id)) => {
                debug!(%course_id, "course already exists");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        }
        self.reload()?;
        Ok(true)
    }

    pub fn delete_course(&mut self, course_id: &str) -> Result<Deletion> {
        let deletion = self.store.delete_course(course_id)?;
        self.reload()?;
        Ok(deletion)
    }

    /// Records an attempt for a course that is still open for attempts.
    pub fn record_exam(&mut self, exam: Exam) -> Result<()> {
        let policy = self.config.grading;
        let course = self
            .student
            .find_course(exam.course_id())
            .with_context(|| format!("course '{}' does not exist", exam.course_id()))?;

        if !course.accepts_attempts(&policy) {
            anyhow::bail!(
                "course '{}' takes no further attempts ({}, {} of {} attempts used)",
                course.course_id(),
                course.pass_status(&policy),
                course.attempt_count(),
                policy.max_attempts
            );
        }

        self.store.save_exam(&exam)?;
        self.reload()
    }

    /// Closes the database connection.
    pub fn close(mut self) -> Result<()> {
        self.store.disconnect()?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use studytrack_core::{ClassTest, PassStatus};

    pub(crate) fn demo_session() -> Session {
        let store = SqliteStore::open_in_memory().unwrap();
        Session::with_store(StudyTrackConfig::default(), store).unwrap()
    }

    pub(crate) fn empty_session() -> Session {
        let config = StudyTrackConfig {
            seed_demo_data: false,
            ..StudyTrackConfig::default()
        };
        Session::with_store(config, SqliteStore::open_in_memory().unwrap()).unwrap()
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    #[test]
    fn first_run_seeds_demo_data() {
        let session = demo_session();
        assert!(session.setup_ran);
        assert_eq!(session.student.courses().len(), 5);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let session = empty_session();
        assert!(session.setup_ran);
        assert!(session.student.courses().is_empty());
    }

    #[test]
    fn create_course_refuses_existing_id() {
        let mut session = demo_session();
        let duplicate = Course::new("Renamed", "ISPE01", "", 10, date(6, 1));
        assert!(!session.create_course(&duplicate).unwrap());
        assert_eq!(
            session.student.find_course("ISPE01").unwrap().name,
            "Specification"
        );
    }

    #[test]
    fn writes_are_visible_after_reload() {
        let mut session = empty_session();
        let course = Course::new("Data Science", "DLBDSIDS01", "", 5, date(5, 21));
        assert!(session.create_course(&course).unwrap());
        session
            .record_exam(ClassTest::new(date(6, 1), "DLBDSIDS01", 77).into())
            .unwrap();

        let course = session.student.find_course("DLBDSIDS01").unwrap();
        assert_eq!(course.pass_status(session.policy()), PassStatus::Passed);

        session.delete_course("DLBDSIDS01").unwrap();
        assert!(session.student.find_course("DLBDSIDS01").is_none());
    }

    #[test]
    fn passed_course_refuses_attempts() {
        let mut session = demo_session();
        let err = session
            .record_exam(ClassTest::new(date(6, 1), "ISPE01", 90).into())
            .unwrap_err();
        assert!(err.to_string().contains("takes no further attempts"));
        assert_eq!(session.student.find_course("ISPE01").unwrap().attempt_count(), 2);
    }

    #[test]
    fn unknown_course_is_an_error() {
        let mut session = demo_session();
        let err = session
            .record_exam(ClassTest::new(date(6, 1), "NOPE", 90).into())
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
