//! The `studytrack settings` command.

use anyhow::Result;

use crate::render;
use crate::session::Session;

pub fn execute(session: &Session) -> Result<()> {
    print!(
        "{}",
        render::settings_text(
            session.policy(),
            session.store.location(),
            &session.student.profile
        )
    );
    Ok(())
}
