//! The single student whose progress is tracked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::course::Course;

/// Personal and programme data of the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    /// First and last name.
    pub name: String,
    pub birthday: NaiveDate,
    /// Matriculation number; identifies the student.
    pub student_number: String,
    /// Degree programme aimed for.
    pub degree: String,
    /// Standard period of study, in semesters.
    pub period: u32,
    /// When the programme was started.
    pub enrolled: NaiveDate,
    /// ECTS needed for the degree.
    pub ects: u32,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Max Mustermann".to_string(),
            birthday: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            student_number: "IU12345678".to_string(),
            degree: "Bachelor Software Development".to_string(),
            period: 12,
            enrolled: NaiveDate::from_ymd_opt(2025, 2, 2).unwrap_or_default(),
            ects: 180,
        }
    }
}

/// The aggregate root: the student and every course they track.
///
/// The course collection is never patched in place. After each write to
/// storage the whole collection is replaced by a fresh load.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub profile: StudentProfile,
    courses: Vec<Course>,
}

impl Student {
    pub fn new(profile: StudentProfile) -> Self {
        Self {
            profile,
            courses: Vec::new(),
        }
    }

    /// Courses in storage order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Replace the whole course collection. Later duplicates of a course id
    /// are dropped.
    pub fn replace_courses(&mut self, courses: Vec<Course>) {
        let mut unique: Vec<Course> = Vec::with_capacity(courses.len());
        for course in courses {
            if !unique.iter().any(|c| c.same_identity_as(&course)) {
                unique.push(course);
            }
        }
        self.courses = unique;
    }

    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id() == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str) -> Course {
        Course::new(name, id, "", 5, NaiveDate::from_ymd_opt(2025, 1, 28).unwrap())
    }

    #[test]
    fn default_profile() {
        let profile = StudentProfile::default();
        assert_eq!(profile.student_number, "IU12345678");
        assert_eq!(profile.ects, 180);
        assert_eq!(profile.enrolled, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
    }

    #[test]
    fn replace_courses_keeps_first_of_each_id() {
        let mut student = Student::new(StudentProfile::default());
        student.replace_courses(vec![
            course("A", "first"),
            course("B", "second"),
            course("A", "duplicate"),
        ]);
        assert_eq!(student.courses().len(), 2);
        assert_eq!(student.find_course("A").unwrap().name, "first");
        assert!(student.find_course("C").is_none());
    }

    #[test]
    fn replace_courses_discards_previous_collection() {
        let mut student = Student::new(StudentProfile::default());
        student.replace_courses(vec![course("A", "a"), course("B", "b")]);
        student.replace_courses(vec![course("B", "b")]);
        assert_eq!(student.courses().len(), 1);
        assert!(student.find_course("A").is_none());
    }

    #[test]
    fn profile_parses_from_toml() {
        let toml_str = r#"
name = "Erika Musterfrau"
birthday = "1999-05-04"
student_number = "IU87654321"
degree = "Bachelor Computer Science"
period = 6
enrolled = "2024-10-01"
ects = 180
"#;
        let profile: StudentProfile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.name, "Erika Musterfrau");
        assert_eq!(profile.enrolled, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }
}
