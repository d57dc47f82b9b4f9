//! SQLite course store.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use studytrack_core::exam::WORKBOOK_TASKS;
use studytrack_core::{AdvancedWorkbook, ClassTest, Course, Exam, ExamVariant};
use tracing::{debug, info};

use crate::store::{CourseStore, Deletion};
use crate::{Result, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS courses (
    name TEXT NOT NULL,
    course_id TEXT PRIMARY KEY,
    description TEXT NOT NULL,
    ects INTEGER NOT NULL,
    started_at DATE NOT NULL
);

CREATE TABLE IF NOT EXISTS advancedworkbooks (
    written_on DATE NOT NULL,
    course_id TEXT NOT NULL,
    t1 INTEGER NOT NULL,
    t2 INTEGER NOT NULL,
    t3 INTEGER NOT NULL,
    t4 INTEGER NOT NULL,
    t5 INTEGER NOT NULL,
    t6 INTEGER NOT NULL,
    elaboration INTEGER NOT NULL,
    FOREIGN KEY (course_id) REFERENCES courses(course_id)
);

CREATE TABLE IF NOT EXISTS classtests (
    written_on DATE NOT NULL,
    course_id TEXT NOT NULL,
    score INTEGER NOT NULL,
    FOREIGN KEY (course_id) REFERENCES courses(course_id)
);
"#;

/// SQLite-backed store holding one connection for the whole session.
///
/// After [`SqliteStore::disconnect`] every operation fails with
/// [`StoreError::NotConnected`].
pub struct SqliteStore {
    conn: Option<Connection>,
    location: String,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        info!("opening SQLite database: {}", path.display());

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn, path.display().to_string())
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, ":memory:".to_string())
    }

    fn from_connection(conn: Connection, location: String) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self {
            conn: Some(conn),
            location,
        })
    }

    /// Where the database lives, for display.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Closes the connection. Calling this twice is a no-op.
    pub fn disconnect(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| e)?;
            info!("closed database {}", self.location);
        }
        Ok(())
    }

    fn conn(&self) -> Result<&Connection> {
        self.conn
            .as_ref()
            .ok_or_else(|| StoreError::NotConnected(self.location.clone()))
    }

    fn conn_mut(&mut self) -> Result<&mut Connection> {
        match self.conn.as_mut() {
            Some(conn) => Ok(conn),
            None => Err(StoreError::NotConnected(self.location.clone())),
        }
    }

    /// Creates the schema if the `courses` table does not exist yet.
    ///
    /// Returns `true` when the schema was created by this call.
    pub fn initialize(&self) -> Result<bool> {
        let conn = self.conn()?;
        let existing: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'courses'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            debug!("schema already present in {}", self.location);
            return Ok(false);
        }

        conn.execute_batch(SCHEMA)?;
        info!("created schema in {}", self.location);
        Ok(true)
    }

    fn course_exists(conn: &Connection, course_id: &str) -> Result<bool> {
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM courses WHERE course_id = ?1",
                params![course_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn load_class_tests(conn: &Connection) -> Result<Vec<Exam>> {
        let mut stmt = conn.prepare(
            "SELECT written_on, course_id, score FROM classtests ORDER BY rowid",
        )?;
        let exams = stmt
            .query_map([], |row| {
                let written_on: NaiveDate = row.get(0)?;
                let course_id: String = row.get(1)?;
                let score: i64 = row.get(2)?;
                Ok(Exam::from(ClassTest::new(written_on, course_id, score)))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exams)
    }

    fn load_workbooks(conn: &Connection) -> Result<Vec<Exam>> {
        let mut stmt = conn.prepare(
            "SELECT written_on, course_id, t1, t2, t3, t4, t5, t6, elaboration
             FROM advancedworkbooks ORDER BY rowid",
        )?;
        let exams = stmt
            .query_map([], |row| {
                let written_on: NaiveDate = row.get(0)?;
                let course_id: String = row.get(1)?;
                let mut tasks = [0i64; WORKBOOK_TASKS];
                for (i, task) in tasks.iter_mut().enumerate() {
                    *task = row.get(2 + i)?;
                }
                let elaboration: i64 = row.get(2 + WORKBOOK_TASKS)?;
                Ok(Exam::from(AdvancedWorkbook::new(
                    written_on,
                    course_id,
                    tasks,
                    elaboration,
                )))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exams)
    }
}

impl CourseStore for SqliteStore {
    fn load_courses(&self) -> Result<Vec<Course>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT name, course_id, description, ects, started_at FROM courses ORDER BY rowid",
        )?;
        let courses = stmt
            .query_map([], |row| {
                let name: String = row.get(0)?;
                let course_id: String = row.get(1)?;
                let description: String = row.get(2)?;
                let ects: u32 = row.get(3)?;
                let started_at: NaiveDate = row.get(4)?;
                Ok(Course::new(name, course_id, description, ects, started_at))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(courses)
    }

    fn load_exams(&self, variant: ExamVariant) -> Result<Vec<Exam>> {
        let conn = self.conn()?;
        match variant {
            ExamVariant::ClassTest => Self::load_class_tests(conn),
            ExamVariant::AdvancedWorkbook => Self::load_workbooks(conn),
        }
    }

    fn save_course(&mut self, course: &Course) -> Result<()> {
        let conn = self.conn()?;
        if Self::course_exists(conn, course.course_id())? {
            return Err(StoreError::DuplicateCourse(course.course_id().to_string()));
        }

        conn.execute(
            "INSERT INTO courses (name, course_id, description, ects, started_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                course.name,
                course.course_id(),
                course.description,
                course.ects,
                course.started_at,
            ],
        )?;
        debug!(course_id = course.course_id(), "saved course");
        Ok(())
    }

    fn save_exam(&mut self, exam: &Exam) -> Result<()> {
        let conn = self.conn()?;
        if !Self::course_exists(conn, exam.course_id())? {
            return Err(StoreError::UnknownCourse(exam.course_id().to_string()));
        }

        match exam {
            Exam::ClassTest(test) => {
                conn.execute(
                    "INSERT INTO classtests (written_on, course_id, score) VALUES (?1, ?2, ?3)",
                    params![test.written_on(), test.course_id(), test.score()],
                )?;
            }
            Exam::AdvancedWorkbook(workbook) => {
                let [t1, t2, t3, t4, t5, t6] = workbook.tasks();
                conn.execute(
                    "INSERT INTO advancedworkbooks
                        (written_on, course_id, t1, t2, t3, t4, t5, t6, elaboration)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        workbook.written_on(),
                        workbook.course_id(),
                        t1,
                        t2,
                        t3,
                        t4,
                        t5,
                        t6,
                        workbook.elaboration(),
                    ],
                )?;
            }
        }
        debug!(
            course_id = exam.course_id(),
            variant = %exam.variant(),
            "saved exam"
        );
        Ok(())
    }

    fn delete_course(&mut self, course_id: &str) -> Result<Deletion> {
        let conn = self.conn_mut()?;
        let tx = conn.transaction()?;

        let mut exams_removed = tx.execute(
            "DELETE FROM classtests WHERE course_id = ?1",
            params![course_id],
        )?;
        exams_removed += tx.execute(
            "DELETE FROM advancedworkbooks WHERE course_id = ?1",
            params![course_id],
        )?;
        let courses_removed =
            tx.execute("DELETE FROM courses WHERE course_id = ?1", params![course_id])?;
        tx.commit()?;

        debug!(course_id, exams_removed, "deleted course");
        Ok(Deletion {
            course_removed: courses_removed > 0,
            exams_removed,
        })
    }
}
