//! The `studytrack courses` command.

use anyhow::Result;
use serde::Serialize;
use studytrack_core::{CourseSummary, Exam};

use super::OutputFormat;
use crate::render;
use crate::session::Session;

/// A course as written by `--format json`.
#[derive(Serialize)]
struct CourseReport<'a> {
    #[serde(flatten)]
    summary: CourseSummary,
    exams: &'a [Exam],
}

pub fn execute(session: &Session, format: OutputFormat) -> Result<()> {
    let policy = session.policy();
    let courses = session.student.courses();

    match format {
        OutputFormat::Json => {
            let reports: Vec<CourseReport<'_>> = courses
                .iter()
                .map(|course| CourseReport {
                    summary: CourseSummary::of(course, policy),
                    exams: course.exams(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            if courses.is_empty() {
                println!("No courses yet. Add one with `studytrack add-course`.");
                return Ok(());
            }
            println!("{}", render::course_table(courses, policy));
            for course in courses {
                println!("\n{}", render::SEPARATOR);
                print!("{}", render::course_full(course, policy));
            }
        }
    }

    Ok(())
}
