//! Demo data written on first run.

use chrono::NaiveDate;
use studytrack_core::{AdvancedWorkbook, ClassTest, Course, Exam};
use tracing::info;

use crate::store::CourseStore;
use crate::Result;

struct DemoCourse {
    name: &'static str,
    course_id: &'static str,
    description: &'static str,
    started_at: (i32, u32, u32),
}

const DEMO_ECTS: u32 = 5;

const DEMO_COURSES: [DemoCourse; 5] = [
    DemoCourse {
        name: "Introduction to Academic Work for IT and Engineering",
        course_id: "DLBWIRITT01",
        description: "Researchers do not simply accept arguments as true but examine them systematically.",
        started_at: (2025, 1, 28),
    },
    DemoCourse {
        name: "Specification",
        course_id: "ISPE01",
        description: "Requirements analysis has to describe the requirements on IT systems precisely.",
        started_at: (2025, 2, 1),
    },
    DemoCourse {
        name: "Data Structures and the Java Class Library",
        course_id: "DLBCSDSJCL02_D",
        description: "Object-oriented programming skills are deepened using Java as the example.",
        started_at: (2025, 2, 18),
    },
    DemoCourse {
        name: "Algorithms, Data Structures and Programming Languages",
        course_id: "DLBIADPS01-01",
        description: "Choosing suitable algorithms and data structures and turning them into code.",
        started_at: (2025, 3, 11),
    },
    DemoCourse {
        name: "Introduction to Data Science",
        course_id: "DLBDSIDS01-01_D",
        description: "Data science grew into a multidisciplinary field that aims to create value from data.",
        started_at: (2025, 5, 21),
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn demo_exams() -> Vec<Exam> {
    vec![
        AdvancedWorkbook::new(ymd((2025, 2, 10)), "DLBWIRITT01", [15; 6], 9).into(),
        AdvancedWorkbook::new(
            ymd((2025, 4, 29)),
            "DLBIADPS01-01",
            [15, 14, 15, 12, 15, 15],
            7,
        )
        .into(),
        ClassTest::new(ymd((2025, 2, 20)), "ISPE01", 45).into(),
        ClassTest::new(ymd((2025, 2, 20)), "ISPE01", 80).into(),
    ]
}

/// Writes the demo courses and their attempts into `store`.
pub fn seed_demo_data<S: CourseStore + ?Sized>(store: &mut S) -> Result<()> {
    for demo in &DEMO_COURSES {
        let course = Course::new(
            demo.name,
            demo.course_id,
            demo.description,
            DEMO_ECTS,
            ymd(demo.started_at),
        );
        store.save_course(&course)?;
    }

    let exams = demo_exams();
    for exam in &exams {
        store.save_exam(exam)?;
    }

    info!(
        courses = DEMO_COURSES.len(),
        exams = exams.len(),
        "seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CourseStoreExt;
    use crate::InMemoryStore;
    use studytrack_core::{GradingPolicy, PassStatus, ProgressEvaluator, Student, StudentProfile};

    fn seeded_student() -> Student {
        let mut store = InMemoryStore::new();
        seed_demo_data(&mut store).unwrap();
        let mut student = Student::new(StudentProfile::default());
        store.reload_student(&mut student).unwrap();
        student
    }

    #[test]
    fn seeds_five_courses_and_four_exams() {
        let mut store = InMemoryStore::new();
        seed_demo_data(&mut store).unwrap();
        assert_eq!(store.load_courses().unwrap().len(), 5);
        assert_eq!(store.exam_count(), 4);
    }

    #[test]
    fn seeding_twice_fails_on_duplicates() {
        let mut store = InMemoryStore::new();
        seed_demo_data(&mut store).unwrap();
        assert!(seed_demo_data(&mut store).is_err());
    }

    #[test]
    fn demo_dashboard_values() {
        let student = seeded_student();
        let policy = GradingPolicy::default();
        let evaluator = ProgressEvaluator::new(&student, &policy);

        let completion = evaluator.completion();
        assert_eq!((completion.passed, completion.total), (3, 5));
        assert_eq!(evaluator.ects_earned().earned, 15);

        let average = evaluator.average_grade().unwrap();
        assert!((average - 4.6 / 3.0).abs() < 1e-9);

        assert_eq!(
            evaluator.most_overdue_course().unwrap().course_id(),
            "DLBCSDSJCL02_D"
        );
        assert_eq!(evaluator.most_attempted_course().unwrap().course_id(), "ISPE01");
    }

    #[test]
    fn demo_course_statuses() {
        let student = seeded_student();
        let policy = GradingPolicy::default();
        let status = |id: &str| student.find_course(id).unwrap().pass_status(&policy);

        assert_eq!(status("DLBWIRITT01"), PassStatus::Passed);
        assert_eq!(status("ISPE01"), PassStatus::Passed);
        assert_eq!(status("DLBIADPS01-01"), PassStatus::Passed);
        assert_eq!(status("DLBCSDSJCL02_D"), PassStatus::NotYetDecided);
        assert_eq!(status("DLBDSIDS01-01_D"), PassStatus::NotYetDecided);
    }
}
