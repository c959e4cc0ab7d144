use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub capacity: i32,
    enrolled_count: i32,
    pub lecturer: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        credits: u32,
        capacity: i32,
        enrolled_count: i32,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            credits,
            capacity,
            enrolled_count,
            lecturer: lecturer.into(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites.extend(codes.into_iter().map(Into::into));
        self
    }

    pub fn add_prerequisite(&mut self, course_code: impl Into<String>) {
        self.prerequisites.push(course_code.into());
    }

    pub fn enrolled_count(&self) -> i32 {
        self.enrolled_count
    }

    pub fn has_open_seat(&self) -> bool {
        self.enrolled_count < self.capacity
    }

    pub(crate) fn record_enrollment(&mut self) {
        self.enrolled_count += 1;
    }

    // No floor at zero: dropping from an empty course goes negative.
    pub(crate) fn record_drop(&mut self) {
        self.enrolled_count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_prerequisite_keeps_order() {
        let mut course = Course::new("IF201", "Struktur Data", 3, 40, 10, "Dr. Dosen");
        assert!(course.prerequisites.is_empty());

        course.add_prerequisite("IF100");
        course.add_prerequisite("IF101");
        assert_eq!(course.prerequisites, vec!["IF100", "IF101"]);
    }

    #[test]
    fn test_missing_prerequisites_deserialize_as_empty() {
        let json = r#"{
            "course_code": "IF101",
            "course_name": "Algoritma",
            "credits": 3,
            "capacity": 40,
            "enrolled_count": 10,
            "lecturer": "Dr. Dosen"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.enrolled_count(), 10);
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn test_open_seat_and_counter() {
        let mut course = Course::new("IF101", "Algoritma", 3, 2, 1, "Dr. Dosen");
        assert!(course.has_open_seat());

        course.record_enrollment();
        assert_eq!(course.enrolled_count(), 2);
        assert!(!course.has_open_seat());

        course.record_drop();
        course.record_drop();
        course.record_drop();
        assert_eq!(course.enrolled_count(), -1);
    }
}
