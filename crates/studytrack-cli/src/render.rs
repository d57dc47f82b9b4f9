//! Text rendering of courses, exams, the dashboard and settings.

use comfy_table::{Cell, Table};
use studytrack_core::exam::MAX_POINTS;
use studytrack_core::progress::{Dashboard, NOMINAL_PROGRAM_YEARS};
use studytrack_core::{Course, CourseSummary, Exam, Grade, GradingPolicy, Scored, StudentProfile};

pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------";
pub const BOLD_SEPARATOR: &str =
    "==========================================================================";

pub fn format_grade(grade: Option<Grade>) -> String {
    grade.map_or_else(|| "no grade".to_string(), |g| g.to_string())
}

/// Average grade with two decimals, or `no data` without passed courses.
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "no data".to_string(), |a| format!("{a:.2}"))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// One row per course.
pub fn course_table(courses: &[Course], policy: &GradingPolicy) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Course ID", "Name", "ECTS", "Started", "Status", "Attempts", "Grade",
    ]);

    for course in courses {
        table.add_row(vec![
            Cell::new(course.course_id()),
            Cell::new(&course.name),
            Cell::new(course.ects),
            Cell::new(course.started_at),
            Cell::new(course.pass_status(policy)),
            Cell::new(course.attempt_count()),
            Cell::new(format_grade(course.grade(policy))),
        ]);
    }

    table
}

/// One row per attempt, in attempt order.
pub fn exam_table(exams: &[Exam], policy: &GradingPolicy) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Written on", "Type", "Details", "Points", "Passed"]);

    for (i, exam) in exams.iter().enumerate() {
        let details = match exam {
            Exam::ClassTest(test) => format!("score {}", test.score()),
            Exam::AdvancedWorkbook(workbook) => {
                let tasks: Vec<String> = workbook.tasks().iter().map(u32::to_string).collect();
                format!(
                    "tasks {} + elaboration {}",
                    tasks.join("/"),
                    workbook.elaboration()
                )
            }
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(exam.written_on()),
            Cell::new(exam.variant().label()),
            Cell::new(details),
            Cell::new(format!("{} / {MAX_POINTS}", exam.points())),
            Cell::new(yes_no(exam.passed(policy))),
        ]);
    }

    table
}

/// Labelled block describing a course without its exams.
pub fn course_short(summary: &CourseSummary) -> String {
    let mut s = String::new();
    s.push_str(&format!("Name       : {}\n", summary.name));
    s.push_str(&format!("Course ID  : {}\n", summary.course_id));
    s.push_str(&format!("Description: {}\n", summary.description));
    s.push_str(&format!("ECTS       : {}\n", summary.ects));
    s.push_str(&format!("Started on : {}\n", summary.started_at));
    s.push_str(&format!("Status     : {}\n", summary.status));
    s.push_str(&format!("Attempts   : {}\n", summary.attempts));
    s.push_str(&format!("Grade      : {}\n", format_grade(summary.grade)));
    s
}

/// The short block followed by every attempt.
pub fn course_full(course: &Course, policy: &GradingPolicy) -> String {
    let mut s = String::from("-- Course --\n\n");
    s.push_str(&course_short(&CourseSummary::of(course, policy)));
    if course.exams().is_empty() {
        s.push_str("\nNo attempts yet.\n");
    } else {
        s.push_str(&format!("\n{}\n", exam_table(course.exams(), policy)));
    }
    s
}

fn section(s: &mut String, title: &str) {
    s.push_str(&format!("\n{SEPARATOR}\n"));
    s.push_str(&format!("-- {title} --\n\n"));
}

pub fn dashboard_text(dashboard: &Dashboard, policy: &GradingPolicy) -> String {
    let mut s = String::from("<< Dashboard >>\n");

    section(
        &mut s,
        &format!("Remaining time to finish within {NOMINAL_PROGRAM_YEARS} years"),
    );
    s.push_str(&format!(
        "Target date: {}\n",
        dashboard.remaining_time.target_date
    ));
    s.push_str(&format!("Days: {}\n", dashboard.remaining_time.days));

    section(&mut s, "Current average grade");
    s.push_str(&format!(
        "Average: {}\n",
        format_average(dashboard.average_grade)
    ));

    section(&mut s, "Course open for the longest time");
    match &dashboard.most_overdue {
        Some(summary) => s.push_str(&course_short(summary)),
        None => s.push_str("No open courses.\n"),
    }

    section(
        &mut s,
        &format!("Course with the most attempts (of at most {})", policy.max_attempts),
    );
    match &dashboard.most_attempted {
        Some(summary) => s.push_str(&course_short(summary)),
        None => s.push_str("No courses yet.\n"),
    }

    section(&mut s, "Courses passed");
    s.push_str(&format!(
        "Passed: {} / {}",
        dashboard.completion.passed, dashboard.completion.total
    ));
    match dashboard.completion.ratio() {
        Some(ratio) => s.push_str(&format!(" ({:.0}%)\n", ratio * 100.0)),
        None => s.push('\n'),
    }

    section(&mut s, "ECTS earned");
    s.push_str(&format!(
        "Earned: {} / {}\n",
        dashboard.ects.earned, dashboard.ects.required
    ));

    s
}

pub fn profile_text(profile: &StudentProfile) -> String {
    let mut s = String::from("-- Student --\n\n");
    s.push_str(&format!("Name          : {}\n", profile.name));
    s.push_str(&format!("Birthday      : {}\n", profile.birthday));
    s.push_str(&format!("Student number: {}\n", profile.student_number));
    s.push_str(&format!("Degree        : {}\n", profile.degree));
    s.push_str(&format!("Period        : {} semesters\n", profile.period));
    s.push_str(&format!("Enrolled      : {}\n", profile.enrolled));
    s.push_str(&format!("ECTS required : {}\n", profile.ects));
    s
}

pub fn settings_text(policy: &GradingPolicy, database: &str, profile: &StudentProfile) -> String {
    let mut s = String::from("-- Settings --\n\n");
    s.push_str(&format!(
        "Points needed to pass an exam: {}\n",
        policy.points_to_pass
    ));
    s.push_str(&format!(
        "Attempts per course          : {}\n",
        policy.max_attempts
    ));
    s.push_str(&format!("Database file                : {database}\n"));
    s.push_str(&format!("\n{}\n", profile_text(profile)));
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use studytrack_core::{AdvancedWorkbook, ClassTest, ProgressEvaluator, Student};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn spec_course() -> Course {
        let mut course = Course::new("Specification", "ISPE01", "Requirements", 5, date(2, 1));
        course
            .record_exam(ClassTest::new(date(2, 20), "ISPE01", 45).into())
            .unwrap();
        course
            .record_exam(ClassTest::new(date(2, 20), "ISPE01", 80).into())
            .unwrap();
        course
    }

    #[test]
    fn grade_and_average_formatting() {
        assert_eq!(format_grade(None), "no grade");
        assert_eq!(format_grade(Some(Grade::EXCELLENT)), "1.0");
        assert_eq!(format_average(None), "no data");
        assert_eq!(format_average(Some(4.6 / 3.0)), "1.53");
    }

    #[test]
    fn course_table_lists_status_and_grade() {
        let rendered = course_table(&[spec_course()], &GradingPolicy::default()).to_string();
        assert!(rendered.contains("ISPE01"));
        assert!(rendered.contains("passed"));
        assert!(rendered.contains("2.3"));
    }

    #[test]
    fn full_course_lists_every_attempt() {
        let policy = GradingPolicy::default();
        let rendered = course_full(&spec_course(), &policy);
        assert!(rendered.contains("Attempts   : 2"));
        assert!(rendered.contains("45 / 100"));
        assert!(rendered.contains("80 / 100"));

        let empty = Course::new("Empty", "E1", "", 5, date(1, 1));
        assert!(course_full(&empty, &policy).contains("No attempts yet."));
    }

    #[test]
    fn workbook_details_show_tasks() {
        let exam: Exam =
            AdvancedWorkbook::new(date(4, 29), "DLBIADPS01-01", [15, 14, 15, 12, 15, 15], 7).into();
        let rendered = exam_table(&[exam], &GradingPolicy::default()).to_string();
        assert!(rendered.contains("15/14/15/12/15/15"));
        assert!(rendered.contains("93 / 100"));
    }

    #[test]
    fn empty_dashboard_reports_no_data() {
        let student = Student::new(StudentProfile::default());
        let policy = GradingPolicy::default();
        let dashboard = ProgressEvaluator::new(&student, &policy).dashboard();
        let rendered = dashboard_text(&dashboard, &policy);

        assert!(rendered.contains("Days: 2190"));
        assert!(rendered.contains("Average: no data"));
        assert!(rendered.contains("No open courses."));
        assert!(rendered.contains("Passed: 0 / 0"));
        assert!(rendered.contains("Earned: 0 / 180"));
    }

    #[test]
    fn settings_show_threshold_and_database() {
        let rendered = settings_text(
            &GradingPolicy::default(),
            "studytrack.db",
            &StudentProfile::default(),
        );
        assert!(rendered.contains("Points needed to pass an exam: 50"));
        assert!(rendered.contains("Database file                : studytrack.db"));
        assert!(rendered.contains("IU12345678"));
    }
}
