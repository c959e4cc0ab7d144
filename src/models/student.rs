use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicStatus {
    Active,
    Probation,
    Suspended,
}

impl AcademicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicStatus::Active => "ACTIVE",
            AcademicStatus::Probation => "PROBATION",
            AcademicStatus::Suspended => "SUSPENDED",
        }
    }
}

impl fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    pub semester: u32,
    pub gpa: f64,
    academic_status: AcademicStatus,
}

impl Student {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        semester: u32,
        gpa: f64,
        academic_status: AcademicStatus,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            semester,
            gpa,
            academic_status,
        }
    }

    pub fn academic_status(&self) -> AcademicStatus {
        self.academic_status
    }

    pub fn is_suspended(&self) -> bool {
        self.academic_status == AcademicStatus::Suspended
    }

    /// Returns a copy of the student carrying `status`.
    pub fn with_academic_status(mut self, status: AcademicStatus) -> Self {
        self.academic_status = status;
        self
    }
}
