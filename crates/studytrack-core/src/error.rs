//! Domain error types.
//!
//! Score values never produce errors (they are truncated instead). What is left
//! are structural mistakes: linking an exam to the wrong course and an
//! unusable grading policy.

use thiserror::Error;

/// Errors raised by the grading domain model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// An exam was attached to a course it does not belong to.
    #[error("exam for course '{exam_course}' cannot be recorded on course '{course}'")]
    CourseMismatch { course: String, exam_course: String },

    /// The configured pass threshold lies outside the 0–100 point range.
    #[error("points to pass must be between 0 and {max}, got {value}")]
    PointsToPassOutOfRange { value: u32, max: u32 },

    /// A course must allow at least one attempt.
    #[error("max attempts must be at least 1")]
    NoAttemptsAllowed,
}

impl DomainError {
    /// Returns `true` if this error comes from configuration rather than data.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DomainError::PointsToPassOutOfRange { .. } | DomainError::NoAttemptsAllowed
        )
    }
}
