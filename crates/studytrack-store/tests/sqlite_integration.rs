//! On-disk SQLite tests: schema setup, persistence across connections, seeding.

use chrono::NaiveDate;
use studytrack_core::{ClassTest, Course, GradingPolicy, PassStatus, Student, StudentProfile};
use studytrack_store::{seed_demo_data, CourseStore, CourseStoreExt, SqliteStore, StoreError};
use tempfile::TempDir;

fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

#[test]
fn data_survives_reopening() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("track.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        assert!(store.initialize().unwrap());
        store
            .save_course(&Course::new("Specification", "ISPE01", "", 5, date(2, 1)))
            .unwrap();
        store
            .save_exam(&ClassTest::new(date(2, 20), "ISPE01", 30).into())
            .unwrap();
        store.disconnect().unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert!(!store.initialize().unwrap());
    let courses = store.load_all_courses().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].attempt_count(), 1);
    assert_eq!(
        courses[0].pass_status(&GradingPolicy::default()),
        PassStatus::NotYetDecided
    );
}

#[test]
fn seeded_database_reloads_into_student() {
    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::open(&dir.path().join("demo.db")).unwrap();
    store.initialize().unwrap();
    seed_demo_data(&mut store).unwrap();

    let mut student = Student::new(StudentProfile::default());
    store.reload_student(&mut student).unwrap();

    assert_eq!(student.courses().len(), 5);
    let ispe = student.find_course("ISPE01").unwrap();
    let points: Vec<u32> = ispe
        .exams()
        .iter()
        .map(studytrack_core::Scored::points)
        .collect();
    assert_eq!(points, vec![45, 80]);
}

#[test]
fn failing_three_times_fails_for_good() {
    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::open(&dir.path().join("fail.db")).unwrap();
    store.initialize().unwrap();
    store
        .save_course(&Course::new("Data Science", "DLBDSIDS01", "", 5, date(5, 21)))
        .unwrap();
    for (day, score) in [(1, 10), (2, 20), (3, 49)] {
        store
            .save_exam(&ClassTest::new(date(6, day), "DLBDSIDS01", score).into())
            .unwrap();
    }

    let courses = store.load_all_courses().unwrap();
    let policy = GradingPolicy::default();
    assert_eq!(courses[0].pass_status(&policy), PassStatus::Failed);
    assert!(courses[0].grade(&policy).is_none());
    assert!(!courses[0].accepts_attempts(&policy));
}

#[test]
fn missing_course_is_reported_as_user_error() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.initialize().unwrap();
    let err = store
        .save_exam(&ClassTest::new(date(2, 20), "GHOST", 90).into())
        .unwrap_err();
    assert!(err.is_user_error());
    assert!(matches!(err, StoreError::UnknownCourse(_)));
}
