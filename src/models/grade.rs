use serde::{Deserialize, Serialize};

/// One completed course's contribution to the GPA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course_code: String,
    pub credits: u32,
    pub grade_point: f64,
}

impl CourseGrade {
    pub fn new(course_code: impl Into<String>, credits: u32, grade_point: f64) -> Self {
        Self {
            course_code: course_code.into(),
            credits,
            grade_point,
        }
    }
}
