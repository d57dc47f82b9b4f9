//! studytrack CLI: track courses, exam attempts and grades of one student.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod menu;
mod render;
mod session;

use commands::add_exam::ExamInput;
use commands::OutputFormat;
use session::Session;

#[derive(Parser)]
#[command(
    name = "studytrack",
    version,
    about = "Track study progress: courses, exam attempts and grades"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file (overrides the config file)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Show the progress dashboard
    Dashboard {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List all courses with their attempts
    Courses {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show pass threshold, database and student profile
    Settings,

    /// Create a course
    AddCourse {
        #[arg(long)]
        name: String,

        /// Unique course id
        #[arg(long)]
        course_id: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value_t = 0)]
        ects: u32,

        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        started_at: Option<String>,
    },

    /// Delete a course and all of its attempts
    DeleteCourse {
        #[arg(long)]
        course_id: String,
    },

    /// Record an exam attempt for an open course
    AddExam {
        /// Day the exam was written (YYYY-MM-DD, default today)
        #[arg(long, global = true)]
        written_on: Option<String>,

        #[command(subcommand)]
        exam: ExamCommand,
    },

    /// Create a starter studytrack.toml
    Init,
}

#[derive(Subcommand)]
enum ExamCommand {
    /// Class test with a single total score (0-100)
    ClassTest {
        #[arg(long)]
        course_id: String,

        #[arg(long, allow_negative_numbers = true)]
        score: i64,
    },

    /// Advanced workbook with six task scores (0-15) and an elaboration (0-10)
    Workbook {
        #[arg(long)]
        course_id: String,

        /// Comma-separated task scores, e.g. 15,14,15,12,15,15
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        tasks: Vec<i64>,

        #[arg(long, allow_negative_numbers = true)]
        elaboration: i64,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("studytrack=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Menu);
    if let Commands::Init = command {
        return commands::init::execute();
    }

    let mut session = Session::open(cli.config.as_deref(), cli.database)?;

    let result = match command {
        Commands::Menu => return commands::menu::execute(session),
        Commands::Dashboard { format } => commands::dashboard::execute(&session, format),
        Commands::Courses { format } => commands::courses::execute(&session, format),
        Commands::Settings => commands::settings::execute(&session),
        Commands::AddCourse {
            name,
            course_id,
            description,
            ects,
            started_at,
        } => commands::add_course::execute(
            &mut session,
            name,
            course_id,
            description,
            ects,
            started_at,
        ),
        Commands::DeleteCourse { course_id } => {
            commands::delete_course::execute(&mut session, course_id)
        }
        Commands::AddExam { written_on, exam } => {
            let input = match exam {
                ExamCommand::ClassTest { course_id, score } => {
                    ExamInput::ClassTest { course_id, score }
                }
                ExamCommand::Workbook {
                    course_id,
                    tasks,
                    elaboration,
                } => ExamInput::Workbook {
                    course_id,
                    tasks,
                    elaboration,
                },
            };
            commands::add_exam::execute(&mut session, input, written_on)
        }
        Commands::Init => Ok(()),
    };

    session.close()?;
    result
}
