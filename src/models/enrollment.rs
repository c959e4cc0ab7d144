use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Approved,
    Rejected,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentStatus::Approved => f.write_str("APPROVED"),
            EnrollmentStatus::Rejected => f.write_str("REJECTED"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub enrollment_id: String,
    pub student_id: String,
    pub course_code: String,
    pub enrolled_at: DateTime<Utc>,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    pub fn new(
        enrollment_id: impl Into<String>,
        student_id: impl Into<String>,
        course_code: impl Into<String>,
        enrolled_at: DateTime<Utc>,
        status: EnrollmentStatus,
    ) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            student_id: student_id.into(),
            course_code: course_code.into(),
            enrolled_at,
            status,
        }
    }

    /// Approved enrollment with a fresh id, stamped now.
    pub fn approved(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self::new(
            Uuid::new_v4().to_string(),
            student_id,
            course_code,
            Utc::now(),
            EnrollmentStatus::Approved,
        )
    }
}
