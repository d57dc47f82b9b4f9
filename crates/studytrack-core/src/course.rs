//! Courses and their pass state.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;
use crate::exam::{Exam, Scored};
use crate::grading::{grade_for_points, Grade, GradingPolicy};

/// Where a course stands.
///
/// ```text
/// NotYetDecided ──┬──► Passed   (an attempt reached the threshold)
///                 └──► Failed   (max attempts used, none passed)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStatus {
    Passed,
    Failed,
    NotYetDecided,
}

impl PassStatus {
    /// Returns true once the course can no longer change state.
    pub fn is_final(&self) -> bool {
        matches!(self, PassStatus::Passed | PassStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PassStatus::Passed => "passed",
            PassStatus::Failed => "failed for good",
            PassStatus::NotYetDecided => "open",
        }
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course being tracked, with every exam attempt written for it.
///
/// Identity is the course id. Two courses with the same id are the same course
/// even if their other fields differ; compare them with
/// [`Course::same_identity_as`].
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub name: String,
    course_id: String,
    pub description: String,
    pub ects: u32,
    pub started_at: NaiveDate,
    exams: Vec<Exam>,
}

impl Course {
    /// A course with no attempts yet.
    pub fn new(
        name: impl Into<String>,
        course_id: impl Into<String>,
        description: impl Into<String>,
        ects: u32,
        started_at: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            course_id: course_id.into(),
            description: description.into(),
            ects,
            started_at,
            exams: Vec::new(),
        }
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Attempts in the order they were recorded.
    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    /// Append an attempt. The exam must belong to this course.
    pub fn record_exam(&mut self, exam: Exam) -> Result<(), DomainError> {
        if exam.course_id() != self.course_id {
            return Err(DomainError::CourseMismatch {
                course: self.course_id.clone(),
                exam_course: exam.course_id().to_string(),
            });
        }
        self.exams.push(exam);
        Ok(())
    }

    /// Whether both values describe the same course.
    pub fn same_identity_as(&self, other: &Course) -> bool {
        self.course_id == other.course_id
    }

    /// Number of attempts, passed or not.
    pub fn attempt_count(&self) -> usize {
        self.exams.len()
    }

    /// The earliest recorded attempt that passed.
    pub fn first_passed_exam(&self, policy: &GradingPolicy) -> Option<&Exam> {
        self.exams.iter().find(|exam| exam.passed(policy))
    }

    pub fn pass_status(&self, policy: &GradingPolicy) -> PassStatus {
        if self.first_passed_exam(policy).is_some() {
            PassStatus::Passed
        } else if self.attempt_count() >= policy.max_attempts as usize {
            PassStatus::Failed
        } else {
            PassStatus::NotYetDecided
        }
    }

    /// Grade of the first passed attempt; `None` while nothing has passed.
    pub fn grade(&self, policy: &GradingPolicy) -> Option<Grade> {
        self.first_passed_exam(policy)
            .map(|exam| grade_for_points(exam.points()))
    }

    /// Whether another attempt may still be recorded.
    pub fn accepts_attempts(&self, policy: &GradingPolicy) -> bool {
        self.pass_status(policy) == PassStatus::NotYetDecided
            && self.attempt_count() < policy.max_attempts as usize
    }
}
