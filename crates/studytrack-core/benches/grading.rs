use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studytrack_core::exam::{AdvancedWorkbook, ClassTest};
use studytrack_core::grading::{grade_for_points, GradingPolicy};
use studytrack_core::progress::ProgressEvaluator;
use studytrack_core::{Course, Exam, Student, StudentProfile};

fn make_student(course_count: usize) -> Student {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let courses = (0..course_count)
        .map(|i| {
            let id = format!("COURSE{i:04}");
            let started = start + chrono::Duration::days(i as i64 % 365);
            let mut course = Course::new(format!("Course {i}"), id.clone(), "", 5, started);
            for attempt in 0..(i % 4) {
                let score = ((i * 7 + attempt * 13) % 101) as i64;
                let exam: Exam = if attempt % 2 == 0 {
                    ClassTest::new(started, id.clone(), score).into()
                } else {
                    AdvancedWorkbook::new(started, id.clone(), [score / 7; 6], score % 11).into()
                };
                course.record_exam(exam).unwrap();
            }
            course
        })
        .collect();

    let mut student = Student::new(StudentProfile::default());
    student.replace_courses(courses);
    student
}

fn bench_grade_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade_scale");

    group.bench_function("all_scores", |b| {
        b.iter(|| {
            for points in 0..=100u32 {
                black_box(grade_for_points(black_box(points)));
            }
        })
    });

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard");
    let policy = GradingPolicy::default();

    for size in [10usize, 100, 1000] {
        let student = make_student(size);
        group.bench_function(format!("courses={size}"), |b| {
            b.iter(|| ProgressEvaluator::new(black_box(&student), &policy).dashboard())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grade_scale, bench_dashboard);
criterion_main!(benches);
