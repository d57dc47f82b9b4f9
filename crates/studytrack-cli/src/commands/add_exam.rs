//! The `studytrack add-exam` command.

use anyhow::Result;
use chrono::Local;
use studytrack_core::{AdvancedWorkbook, ClassTest, Exam, Scored};

use crate::input::{parse_date_input, workbook_tasks};
use crate::session::Session;

/// An attempt as given on the command line, before validation.
pub enum ExamInput {
    ClassTest {
        course_id: String,
        score: i64,
    },
    Workbook {
        course_id: String,
        tasks: Vec<i64>,
        elaboration: i64,
    },
}

pub fn execute(session: &mut Session, input: ExamInput, written_on: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let written_on = written_on
        .map(|raw| parse_date_input(&raw, today))
        .unwrap_or(today);

    let exam: Exam = match input {
        ExamInput::ClassTest { course_id, score } => {
            ClassTest::new(written_on, course_id, score).into()
        }
        ExamInput::Workbook {
            course_id,
            tasks,
            elaboration,
        } => AdvancedWorkbook::new(written_on, course_id, workbook_tasks(&tasks)?, elaboration)
            .into(),
    };

    let course_id = exam.course_id().to_string();
    let points = exam.points();
    let label = exam.variant().label();
    session.record_exam(exam)?;

    let policy = session.policy();
    if let Some(course) = session.student.find_course(&course_id) {
        println!(
            "{label} recorded for '{course_id}': {points} points, course is {}.",
            course.pass_status(policy)
        );
    }
    Ok(())
}
