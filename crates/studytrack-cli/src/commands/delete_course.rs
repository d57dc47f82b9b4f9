//! The `studytrack delete-course` command.

use anyhow::Result;

use crate::session::Session;

pub fn execute(session: &mut Session, course_id: String) -> Result<()> {
    let deletion = session.delete_course(&course_id)?;
    if !deletion.course_removed {
        anyhow::bail!("course '{course_id}' does not exist");
    }

    println!(
        "Course '{course_id}' deleted ({} exam(s) removed).",
        deletion.exams_removed
    );
    Ok(())
}
