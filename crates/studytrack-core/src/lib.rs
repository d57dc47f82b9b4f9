//! studytrack-core: grading rules and progress evaluation.
//!
//! This crate holds the domain model of studytrack: exams and how they are
//! scored, courses and their pass state, the student aggregate, and the
//! dashboard statistics computed over it.

pub mod config;
pub mod course;
pub mod error;
pub mod exam;
pub mod grading;
pub mod progress;
pub mod student;

pub use config::{load_config_from, StudyTrackConfig};
pub use course::{Course, PassStatus};
pub use error::DomainError;
pub use exam::{AdvancedWorkbook, ClassTest, Exam, ExamVariant, Scored};
pub use grading::{grade_for_points, Grade, GradingPolicy};
pub use progress::{CourseSummary, Dashboard, ProgressEvaluator};
pub use student::{Student, StudentProfile};
