//! The interactive, page-based text menu.
//!
//! The menu reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so it can be driven by a script as well as by a terminal.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use studytrack_core::exam::WORKBOOK_TASKS;
use studytrack_core::{AdvancedWorkbook, ClassTest, Course, Exam};
use tracing::debug;

use crate::input::{parse_count_input, parse_int_input};
use crate::render;
use crate::session::Session;

const LOGO: &str = r"
  _________ __            .___      ___________                     __
 /   _____//  |_ __ __  __| _/__.__.\__    ___/___________    ____ |  | __
 \_____  \\   __\  |  \/ __ <   |  |  |    |  \_  __ \__  \ _/ ___\|  |/ /
 /        \|  | |  |  / /_/ |\___  |  |    |   |  | \// __ \\  \___|    <
/_______  /|__| |____/\____ |/ ____|  |____|   |__|  (____  /\___  >__|_ \
        \/                 \/\/                           \/     \/     \/
";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Menu pages, addressed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Dashboard,
    Settings,
    Courses,
    CreateCourse,
    DeleteCourse,
    RecordExam,
    Quit,
}

impl Page {
    pub fn from_number(number: i64) -> Option<Page> {
        match number {
            0 => Some(Page::Main),
            1 => Some(Page::Dashboard),
            2 => Some(Page::Settings),
            3 => Some(Page::Courses),
            4 => Some(Page::CreateCourse),
            5 => Some(Page::DeleteCourse),
            6 => Some(Page::RecordExam),
            9 => Some(Page::Quit),
            _ => None,
        }
    }

    /// The page shown after the user typed `raw` on `current`.
    ///
    /// Unparseable input counts as 0; numbers without a page keep `current`.
    pub fn next(current: Page, raw: &str) -> Page {
        Page::from_number(parse_int_input(raw)).unwrap_or(current)
    }
}

pub struct Menu<'s, R, W> {
    session: &'s mut Session,
    input: R,
    output: W,
    page: Page,
    today: NaiveDate,
    clear_screen: bool,
    exhausted: bool,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(session: &'s mut Session, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            session,
            input,
            output,
            page: Page::Main,
            today,
            clear_screen: false,
            exhausted: false,
        }
    }

    /// Clear the screen before each page.
    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Runs until the user quits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        if self.session.setup_ran {
            writeln!(self.output, "<< Database setup done! >>")?;
        }

        loop {
            if self.clear_screen {
                write!(self.output, "{CLEAR_SCREEN}")?;
            }
            writeln!(self.output, "{LOGO}")?;

            debug!(page = ?self.page, "drawing page");
            match self.page {
                Page::Main => self.show_main()?,
                Page::Dashboard => self.show_dashboard()?,
                Page::Settings => self.show_settings()?,
                Page::Courses => self.show_courses()?,
                Page::CreateCourse => self.create_course()?,
                Page::DeleteCourse => self.delete_course()?,
                Page::RecordExam => self.record_exam()?,
                Page::Quit => {
                    writeln!(self.output, "Quitting ...")?;
                    return Ok(());
                }
            }

            writeln!(self.output, "\n{}", render::BOLD_SEPARATOR)?;
            let raw = self.prompt("Page number")?;
            if self.exhausted {
                writeln!(self.output)?;
                return Ok(());
            }
            self.page = Page::next(self.page, &raw);
        }
    }

    /// Shows `label` and reads one line. At end of input returns an empty
    /// line and marks the menu as exhausted.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.exhausted = true;
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn separator(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", render::SEPARATOR)?;
        Ok(())
    }

    /// Lists `courses` 1-based and returns the chosen index, or `None` on
    /// cancel or an out-of-range choice.
    fn select_course(&mut self, courses: &[(String, String)]) -> Result<Option<usize>> {
        for (i, (name, course_id)) in courses.iter().enumerate() {
            writeln!(self.output, "{} = {name} / {course_id}", i + 1)?;
        }
        writeln!(self.output)?;

        let choice = parse_int_input(&self.prompt("Course number (0 = cancel)")?);
        if choice < 1 || choice > courses.len() as i64 {
            return Ok(None);
        }
        Ok(Some(choice as usize - 1))
    }

    fn show_main(&mut self) -> Result<()> {
        let location = self.session.store.location().to_string();
        if self.session.store.is_connected() {
            writeln!(self.output, "Connected to database {location}\n")?;
        } else {
            writeln!(self.output, "Disconnected from database {location}\n")?;
        }

        writeln!(
            self.output,
            ">> Hello {}! Choose an option <<\n",
            self.session.student.profile.name
        )?;
        writeln!(self.output, "0 = Show main menu")?;
        writeln!(self.output, "1 = Show dashboard")?;
        writeln!(self.output, "2 = Show settings")?;
        writeln!(self.output, "3 = Show all courses")?;
        writeln!(self.output, "4 = Create course")?;
        writeln!(self.output, "5 = Delete course")?;
        writeln!(self.output, "6 = Record exam for course")?;
        writeln!(self.output, "9 = Quit")?;
        Ok(())
    }

    fn show_dashboard(&mut self) -> Result<()> {
        let dashboard = self.session.evaluator().dashboard();
        let text = render::dashboard_text(&dashboard, self.session.policy());
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn show_settings(&mut self) -> Result<()> {
        let text = render::settings_text(
            self.session.policy(),
            self.session.store.location(),
            &self.session.student.profile,
        );
        write!(self.output, "{text}")?;
        Ok(())
    }

    fn show_courses(&mut self) -> Result<()> {
        writeln!(self.output, "All courses.")?;
        self.session.reload()?;

        let policy = *self.session.policy();
        for course in self.session.student.courses() {
            writeln!(self.output, "\n{}", render::SEPARATOR)?;
            write!(self.output, "{}", render::course_full(course, &policy))?;
        }
        if self.session.student.courses().is_empty() {
            writeln!(self.output, "\nNo courses yet.")?;
        }
        Ok(())
    }

    fn create_course(&mut self) -> Result<()> {
        writeln!(self.output, "Create course.")?;
        self.separator()?;

        let name = self.prompt("Name")?;
        let course_id = self.prompt("Course ID")?.trim().to_string();
        let description = self.prompt("Description")?;
        let ects = parse_count_input(&self.prompt("ECTS")?);

        if course_id.is_empty() {
            writeln!(self.output, "\nA course ID is required, nothing saved.")?;
            return Ok(());
        }

        let course = Course::new(name, course_id.as_str(), description, ects, self.today);
        if self.session.create_course(&course)? {
            writeln!(self.output, "\nCourse with ID '{course_id}' saved to the database!")?;
        } else {
            writeln!(
                self.output,
                "\nCourse with ID '{course_id}' already exists in the database!"
            )?;
        }
        Ok(())
    }

    fn delete_course(&mut self) -> Result<()> {
        writeln!(self.output, "Delete course.")?;
        self.separator()?;

        let choices = self.course_choices(|_| true);
        let Some(index) = self.select_course(&choices)? else {
            return Ok(());
        };

        let course_id = &choices[index].1;
        let deletion = self.session.delete_course(course_id)?;
        writeln!(
            self.output,
            "\nCourse with ID '{course_id}' deleted ({} exam(s) removed)!",
            deletion.exams_removed
        )?;
        Ok(())
    }

    fn record_exam(&mut self) -> Result<()> {
        writeln!(self.output, "Record exam for course.")?;
        self.separator()?;

        let policy = *self.session.policy();
        let choices = self.course_choices(|c| c.accepts_attempts(&policy));
        if choices.is_empty() {
            writeln!(self.output, "No course is open for another attempt.")?;
            return Ok(());
        }

        let Some(index) = self.select_course(&choices)? else {
            return Ok(());
        };
        let course_id = choices[index].1.clone();

        writeln!(self.output, "\n\nChoose exam type:\n")?;
        writeln!(self.output, "1 = Advanced workbook")?;
        writeln!(self.output, "2 = Class test")?;
        writeln!(self.output)?;

        let exam: Exam = match parse_int_input(&self.prompt("Exam type (0 = cancel)")?) {
            1 => {
                writeln!(self.output, "\n\nRecord advanced workbook:\n")?;
                let mut tasks = [0i64; WORKBOOK_TASKS];
                for (i, task) in tasks.iter_mut().enumerate() {
                    *task = parse_int_input(&self.prompt(&format!("Points for task {}", i + 1))?);
                }
                let elaboration = parse_int_input(&self.prompt("Points for the elaboration")?);
                AdvancedWorkbook::new(self.today, course_id.as_str(), tasks, elaboration).into()
            }
            2 => {
                writeln!(self.output, "\n\nRecord class test:\n")?;
                let score = parse_int_input(&self.prompt("Total points")?);
                ClassTest::new(self.today, course_id.as_str(), score).into()
            }
            _ => return Ok(()),
        };

        let label = exam.variant().label();
        self.session.record_exam(exam)?;
        writeln!(
            self.output,
            "\n{label} for course with ID '{course_id}' recorded!"
        )?;
        Ok(())
    }

    /// `(name, course_id)` of every course matching `filter`, in course order.
    fn course_choices(&self, filter: impl Fn(&Course) -> bool) -> Vec<(String, String)> {
        self.session
            .student
            .courses()
            .iter()
            .filter(|c| filter(c))
            .map(|c| (c.name.clone(), c.course_id().to_string()))
            .collect()
    }
}
