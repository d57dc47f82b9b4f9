//! The `studytrack add-course` command.

use anyhow::Result;
use chrono::Local;
use studytrack_core::Course;

use crate::input::parse_date_input;
use crate::session::Session;

pub fn execute(
    session: &mut Session,
    name: String,
    course_id: String,
    description: String,
    ects: u32,
    started_at: Option<String>,
) -> Result<()> {
    let course_id = course_id.trim().to_string();
    anyhow::ensure!(!course_id.is_empty(), "course id must not be empty");

    let today = Local::now().date_naive();
    let started_at = started_at
        .map(|raw| parse_date_input(&raw, today))
        .unwrap_or(today);

    let course = Course::new(name, course_id.as_str(), description, ects, started_at);
    if !session.create_course(&course)? {
        anyhow::bail!("course '{course_id}' already exists");
    }

    println!("Course '{course_id}' saved.");
    Ok(())
}
