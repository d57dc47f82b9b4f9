//! Exam attempts and how they are scored.
//!
//! Two kinds of exam exist: a class test with a single score, and an advanced
//! workbook made of six tasks plus an elaboration score. Every scored field is
//! truncated into its own range when the exam is built, so an `Exam` value can
//! never hold a negative or oversized score.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::grading::GradingPolicy;

/// Maximum points any exam can reach.
pub const MAX_POINTS: u32 = 100;
/// Maximum points for one workbook task.
pub const TASK_MAX_POINTS: u32 = 15;
/// Maximum points for the workbook elaboration.
pub const ELABORATION_MAX_POINTS: u32 = 10;
/// Number of tasks in an advanced workbook.
pub const WORKBOOK_TASKS: usize = 6;

/// Clamp `value` into `[0, max]`.
pub fn truncate(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

/// Anything that produces exam points.
pub trait Scored {
    /// Points reached, out of [`MAX_POINTS`].
    fn points(&self) -> u32;

    /// Whether the points reach the policy's pass threshold.
    fn passed(&self, policy: &GradingPolicy) -> bool {
        policy.is_passing(self.points())
    }
}

/// A written class test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassTest {
    written_on: NaiveDate,
    course_id: String,
    score: u32,
}

impl ClassTest {
    pub fn new(written_on: NaiveDate, course_id: impl Into<String>, score: i64) -> Self {
        Self {
            written_on,
            course_id: course_id.into(),
            score: truncate(score, MAX_POINTS),
        }
    }

    pub fn written_on(&self) -> NaiveDate {
        self.written_on
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Scored for ClassTest {
    fn points(&self) -> u32 {
        self.score
    }
}

/// An advanced workbook: six tasks of up to 15 points and an elaboration of up
/// to 10 points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedWorkbook {
    written_on: NaiveDate,
    course_id: String,
    tasks: [u32; WORKBOOK_TASKS],
    elaboration: u32,
}

impl AdvancedWorkbook {
    pub fn new(
        written_on: NaiveDate,
        course_id: impl Into<String>,
        tasks: [i64; WORKBOOK_TASKS],
        elaboration: i64,
    ) -> Self {
        Self {
            written_on,
            course_id: course_id.into(),
            tasks: tasks.map(|t| truncate(t, TASK_MAX_POINTS)),
            elaboration: truncate(elaboration, ELABORATION_MAX_POINTS),
        }
    }

    pub fn written_on(&self) -> NaiveDate {
        self.written_on
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// Task scores in task order.
    pub fn tasks(&self) -> [u32; WORKBOOK_TASKS] {
        self.tasks
    }

    pub fn elaboration(&self) -> u32 {
        self.elaboration
    }
}

impl Scored for AdvancedWorkbook {
    fn points(&self) -> u32 {
        self.tasks.iter().sum::<u32>() + self.elaboration
    }
}

/// The kind of an exam, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExamVariant {
    ClassTest,
    AdvancedWorkbook,
}

impl ExamVariant {
    /// All variants, in the order exams are merged when a course is loaded.
    pub const ALL: [ExamVariant; 2] = [ExamVariant::AdvancedWorkbook, ExamVariant::ClassTest];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExamVariant::ClassTest => "Class test",
            ExamVariant::AdvancedWorkbook => "Advanced workbook",
        }
    }
}

impl fmt::Display for ExamVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamVariant::ClassTest => write!(f, "class-test"),
            ExamVariant::AdvancedWorkbook => write!(f, "workbook"),
        }
    }
}

impl FromStr for ExamVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class-test" | "classtest" | "test" => Ok(ExamVariant::ClassTest),
            "workbook" | "advanced-workbook" | "advancedworkbook" => {
                Ok(ExamVariant::AdvancedWorkbook)
            }
            other => Err(format!("unknown exam type: {other}")),
        }
    }
}

/// One graded attempt at passing a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Exam {
    ClassTest(ClassTest),
    AdvancedWorkbook(AdvancedWorkbook),
}

impl Exam {
    pub fn written_on(&self) -> NaiveDate {
        match self {
            Exam::ClassTest(t) => t.written_on(),
            Exam::AdvancedWorkbook(w) => w.written_on(),
        }
    }

    /// Id of the course this attempt belongs to.
    pub fn course_id(&self) -> &str {
        match self {
            Exam::ClassTest(t) => t.course_id(),
            Exam::AdvancedWorkbook(w) => w.course_id(),
        }
    }

    pub fn variant(&self) -> ExamVariant {
        match self {
            Exam::ClassTest(_) => ExamVariant::ClassTest,
            Exam::AdvancedWorkbook(_) => ExamVariant::AdvancedWorkbook,
        }
    }
}

impl Scored for Exam {
    fn points(&self) -> u32 {
        match self {
            Exam::ClassTest(t) => t.points(),
            Exam::AdvancedWorkbook(w) => w.points(),
        }
    }
}

impl From<ClassTest> for Exam {
    fn from(test: ClassTest) -> Self {
        Exam::ClassTest(test)
    }
}

impl From<AdvancedWorkbook> for Exam {
    fn from(workbook: AdvancedWorkbook) -> Self {
        Exam::AdvancedWorkbook(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    #[test]
    fn truncate_clamps_into_range() {
        assert_eq!(truncate(-5, 15), 0);
        assert_eq!(truncate(20, 15), 15);
        assert_eq!(truncate(7, 15), 7);
        assert_eq!(truncate(0, 15), 0);
        assert_eq!(truncate(15, 15), 15);
        assert_eq!(truncate(i64::MIN, 10), 0);
        assert_eq!(truncate(i64::MAX, 10), 10);
    }

    #[test]
    fn truncate_stays_in_range_for_any_input() {
        for value in -200..=200 {
            let t = truncate(value, 15);
            assert!(t <= 15, "truncate({value}, 15) = {t}");
        }
    }

    #[test]
    fn full_workbook_is_worth_100_points() {
        let wb = AdvancedWorkbook::new(day(), "ISPE01", [15; 6], 10);
        assert_eq!(wb.points(), 100);
    }

    #[test]
    fn workbook_truncates_each_field_not_the_sum() {
        let wb = AdvancedWorkbook::new(day(), "ISPE01", [20, -3, 15, 15, 15, 15], 12);
        assert_eq!(wb.tasks(), [15, 0, 15, 15, 15, 15]);
        assert_eq!(wb.elaboration(), 10);
        assert_eq!(wb.points(), 85);
    }

    #[test]
    fn class_test_pass_threshold() {
        let policy = GradingPolicy::default();
        assert!(!ClassTest::new(day(), "ISPE01", 45).passed(&policy));
        assert!(ClassTest::new(day(), "ISPE01", 50).passed(&policy));
    }

    #[test]
    fn class_test_score_is_truncated() {
        assert_eq!(ClassTest::new(day(), "ISPE01", 140).points(), 100);
        assert_eq!(ClassTest::new(day(), "ISPE01", -1).points(), 0);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let strict = GradingPolicy {
            points_to_pass: 60,
            ..GradingPolicy::default()
        };
        let exam: Exam = ClassTest::new(day(), "ISPE01", 55).into();
        assert!(exam.passed(&GradingPolicy::default()));
        assert!(!exam.passed(&strict));
    }

    #[test]
    fn exam_exposes_shared_fields() {
        let exam: Exam = AdvancedWorkbook::new(day(), "DLBWIRITT01", [15; 6], 9).into();
        assert_eq!(exam.course_id(), "DLBWIRITT01");
        assert_eq!(exam.written_on(), day());
        assert_eq!(exam.variant(), ExamVariant::AdvancedWorkbook);
        assert_eq!(exam.points(), 99);
    }

    #[test]
    fn variant_display_and_parse() {
        assert_eq!(ExamVariant::ClassTest.to_string(), "class-test");
        assert_eq!(
            "workbook".parse::<ExamVariant>().unwrap(),
            ExamVariant::AdvancedWorkbook
        );
        assert_eq!(
            "Class-Test".parse::<ExamVariant>().unwrap(),
            ExamVariant::ClassTest
        );
        assert!("oral".parse::<ExamVariant>().is_err());
    }

    #[test]
    fn exam_serializes_with_kind_tag() {
        let exam: Exam = ClassTest::new(day(), "ISPE01", 80).into();
        let json = serde_json::to_value(&exam).unwrap();
        assert_eq!(json["kind"], "class_test");
        assert_eq!(json["score"], 80);
        assert_eq!(json["written_on"], "2025-02-20");
    }
}
