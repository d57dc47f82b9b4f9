//! Dashboard statistics over the student's courses.
//!
//! Every figure is computed independently from the current course collection;
//! nothing is cached between calls.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::course::{Course, PassStatus};
use crate::grading::{Grade, GradingPolicy};
use crate::student::Student;

/// Nominal length of the programme in years.
pub const NOMINAL_PROGRAM_YEARS: i64 = 6;

/// Time budget for finishing the programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingTime {
    /// Enrollment date plus the nominal programme length.
    pub target_date: NaiveDate,
    /// Days from enrollment to the target date.
    pub days: i64,
}

/// Passed courses against all tracked courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub passed: usize,
    pub total: usize,
}

impl Completion {
    /// Share of passed courses, `None` without any courses.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.passed as f64 / self.total as f64)
        }
    }
}

/// Earned credits against the credits the degree requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EctsProgress {
    pub earned: u32,
    pub required: u32,
}

/// A flat, display-ready view of one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course_id: String,
    pub name: String,
    pub description: String,
    pub ects: u32,
    pub started_at: NaiveDate,
    pub status: PassStatus,
    pub attempts: usize,
    pub grade: Option<Grade>,
}

impl CourseSummary {
    pub fn of(course: &Course, policy: &GradingPolicy) -> Self {
        Self {
            course_id: course.course_id().to_string(),
            name: course.name.clone(),
            description: course.description.clone(),
            ects: course.ects,
            started_at: course.started_at,
            status: course.pass_status(policy),
            attempts: course.attempt_count(),
            grade: course.grade(policy),
        }
    }
}

/// Everything the dashboard shows, computed in one go.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub remaining_time: RemainingTime,
    /// `None` when no course has been passed yet.
    pub average_grade: Option<f64>,
    pub most_overdue: Option<CourseSummary>,
    pub most_attempted: Option<CourseSummary>,
    pub completion: Completion,
    pub ects: EctsProgress,
}

/// Computes progress figures for one student under one grading policy.
pub struct ProgressEvaluator<'a> {
    student: &'a Student,
    policy: &'a GradingPolicy,
}

impl<'a> ProgressEvaluator<'a> {
    pub fn new(student: &'a Student, policy: &'a GradingPolicy) -> Self {
        Self { student, policy }
    }

    fn courses_with_status(&self, status: PassStatus) -> impl Iterator<Item = &'a Course> + '_ {
        self.student
            .courses()
            .iter()
            .filter(move |c| c.pass_status(self.policy) == status)
    }

    /// Days between enrollment and enrollment plus the nominal programme
    /// length. This does not depend on today's date.
    pub fn remaining_time(&self) -> RemainingTime {
        let enrolled = self.student.profile.enrolled;
        let target_date = enrolled + Duration::days(365 * NOMINAL_PROGRAM_YEARS);
        RemainingTime {
            target_date,
            days: (target_date - enrolled).num_days(),
        }
    }

    /// Mean grade over passed courses.
    pub fn average_grade(&self) -> Option<f64> {
        let grades: Vec<f64> = self
            .courses_with_status(PassStatus::Passed)
            .filter_map(|c| c.grade(self.policy))
            .map(Grade::value)
            .collect();
        if grades.is_empty() {
            return None;
        }
        Some(grades.iter().sum::<f64>() / grades.len() as f64)
    }

    /// The open course that was started first. Ties go to the course listed
    /// first.
    pub fn most_overdue_course(&self) -> Option<&'a Course> {
        self.courses_with_status(PassStatus::NotYetDecided)
            .min_by_key(|c| c.started_at)
    }

    /// The course with the most attempts, whatever its status. Ties go to the
    /// course listed first.
    pub fn most_attempted_course(&self) -> Option<&'a Course> {
        self.student.courses().iter().reduce(|best, course| {
            if course.attempt_count() > best.attempt_count() {
                course
            } else {
                best
            }
        })
    }

    pub fn completion(&self) -> Completion {
        Completion {
            passed: self.courses_with_status(PassStatus::Passed).count(),
            total: self.student.courses().len(),
        }
    }

    pub fn ects_earned(&self) -> EctsProgress {
        EctsProgress {
            earned: self
                .courses_with_status(PassStatus::Passed)
                .map(|c| c.ects)
                .fold(0, u32::saturating_add),
            required: self.student.profile.ects,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            remaining_time: self.remaining_time(),
            average_grade: self.average_grade(),
            most_overdue: self
                .most_overdue_course()
                .map(|c| CourseSummary::of(c, self.policy)),
            most_attempted: self
                .most_attempted_course()
                .map(|c| CourseSummary::of(c, self.policy)),
            completion: self.completion(),
            ects: self.ects_earned(),
        }
    }
}
