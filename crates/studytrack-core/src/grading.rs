//! Pass threshold and the points-to-grade scale.
//!
//! The scale is the German 1.0–5.0 system: every integer score from 0 to 100
//! falls into exactly one band, and a 5.0 means "not passed".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::exam::MAX_POINTS;

/// A grade on the 1.0 (best) to 5.0 (failed) scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(f64);

impl Grade {
    pub const EXCELLENT: Grade = Grade(1.0);
    pub const FAILED: Grade = Grade(5.0);

    /// The numeric value of the grade.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// One row of the grading scale: an inclusive points range and its grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub min_points: u32,
    pub max_points: u32,
    pub grade: Grade,
}

impl GradeBand {
    const fn new(min_points: u32, max_points: u32, grade: f64) -> Self {
        Self {
            min_points,
            max_points,
            grade: Grade(grade),
        }
    }

    /// Whether `points` falls inside this band (both ends inclusive).
    pub fn contains(&self, points: u32) -> bool {
        (self.min_points..=self.max_points).contains(&points)
    }
}

/// The grading scale, best band first.
pub const GRADE_SCALE: [GradeBand; 11] = [
    GradeBand::new(96, 100, 1.0),
    GradeBand::new(91, 95, 1.3),
    GradeBand::new(86, 90, 1.7),
    GradeBand::new(81, 85, 2.0),
    GradeBand::new(76, 80, 2.3),
    GradeBand::new(71, 75, 2.7),
    GradeBand::new(66, 70, 3.0),
    GradeBand::new(61, 65, 3.3),
    GradeBand::new(56, 60, 3.7),
    GradeBand::new(50, 55, 4.0),
    GradeBand::new(0, 49, 5.0),
];

/// Map exam points to a grade. Points above the maximum count as full marks.
pub fn grade_for_points(points: u32) -> Grade {
    let points = points.min(MAX_POINTS);
    GRADE_SCALE
        .iter()
        .find(|band| band.contains(points))
        .map(|band| band.grade)
        .unwrap_or(Grade::FAILED)
}

pub const DEFAULT_POINTS_TO_PASS: u32 = 50;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// How exams and courses are judged.
///
/// Built once at start-up from configuration and handed to every operation
/// that needs to know whether something passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPolicy {
    /// Minimum points (of 100) for an exam to count as passed.
    #[serde(default = "default_points_to_pass")]
    pub points_to_pass: u32,
    /// Failed attempts after which a course is failed for good.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_points_to_pass() -> u32 {
    DEFAULT_POINTS_TO_PASS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            points_to_pass: DEFAULT_POINTS_TO_PASS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GradingPolicy {
    /// Whether a score reaches the pass threshold.
    pub fn is_passing(&self, points: u32) -> bool {
        points >= self.points_to_pass
    }

    /// Reject thresholds no exam could meet and policies without attempts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.points_to_pass > MAX_POINTS {
            return Err(DomainError::PointsToPassOutOfRange {
                value: self.points_to_pass,
                max: MAX_POINTS,
            });
        }
        if self.max_attempts == 0 {
            return Err(DomainError::NoAttemptsAllowed);
        }
        Ok(())
    }
}
