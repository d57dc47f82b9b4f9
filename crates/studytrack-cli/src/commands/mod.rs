//! Subcommand implementations.

use clap::ValueEnum;

pub mod add_course;
pub mod add_exam;
pub mod courses;
pub mod dashboard;
pub mod delete_course;
pub mod init;
pub mod menu;
pub mod settings;

/// Output format for read-only commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
