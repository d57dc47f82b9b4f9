//! The `studytrack menu` command, also run when no subcommand is given.

use std::io::{self, IsTerminal};

use anyhow::Result;
use chrono::Local;

use crate::menu::Menu;
use crate::session::Session;

pub fn execute(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();

    Menu::new(
        &mut session,
        stdin.lock(),
        stdout.lock(),
        Local::now().date_naive(),
    )
    .clear_screen(interactive)
    .run()?;

    session.close()
}
