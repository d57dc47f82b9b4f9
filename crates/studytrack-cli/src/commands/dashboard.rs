//! The `studytrack dashboard` command.

use anyhow::Result;

use super::OutputFormat;
use crate::render;
use crate::session::Session;

pub fn execute(session: &Session, format: OutputFormat) -> Result<()> {
    let dashboard = session.evaluator().dashboard();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
        OutputFormat::Text => print!("{}", render::dashboard_text(&dashboard, session.policy())),
    }

    Ok(())
}
