use crate::error::{AppError, Result};
use crate::models::{AcademicStatus, CourseGrade};

const MIN_GPA: f64 = 0.0;
const MAX_GPA: f64 = 4.0;

/// GPA, academic standing and credit-load rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradeCalculator;

impl GradeCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Credit-weighted average of `grades`, rounded to two decimals.
    ///
    /// An empty list, or one where every entry has zero credits, yields 0.0.
    pub fn calculate_gpa(&self, grades: &[CourseGrade]) -> Result<f64> {
        if let Some(bad) = grades.iter().find(|g| !in_gpa_range(g.grade_point)) {
            return Err(AppError::invalid_argument(format!(
                "grade point {} for {} must be between {} and {}",
                bad.grade_point, bad.course_code, MIN_GPA, MAX_GPA
            )));
        }

        let (weighted, credits) = grades
            .iter()
            .filter(|g| g.credits > 0)
            .fold((0.0_f64, 0_u64), |(weighted, credits), g| {
                (
                    weighted + g.grade_point * f64::from(g.credits),
                    credits + u64::from(g.credits),
                )
            });

        if credits == 0 {
            return Ok(0.0);
        }

        Ok(round2(weighted / credits as f64))
    }

    pub fn determine_academic_status(&self, gpa: f64, semester: u32) -> Result<AcademicStatus> {
        check_gpa(gpa)?;
        if semester == 0 {
            return Err(AppError::invalid_argument(format!(
                "semester must be at least 1, got {}",
                semester
            )));
        }

        let status = match semester {
            1..=2 => {
                if gpa >= 2.0 {
                    AcademicStatus::Active
                } else {
                    AcademicStatus::Probation
                }
            }
            3..=4 => {
                if gpa >= 2.25 {
                    AcademicStatus::Active
                } else if gpa >= 1.75 {
                    AcademicStatus::Probation
                } else {
                    AcademicStatus::Suspended
                }
            }
            _ => {
                if gpa >= 2.5 {
                    AcademicStatus::Active
                } else if gpa >= 2.0 {
                    AcademicStatus::Probation
                } else {
                    AcademicStatus::Suspended
                }
            }
        };

        Ok(status)
    }

    pub fn calculate_max_credits(&self, gpa: f64) -> Result<u32> {
        check_gpa(gpa)?;

        let cap = if gpa >= 3.5 {
            24
        } else if gpa >= 2.5 {
            21
        } else if gpa >= 2.0 {
            18
        } else {
            15
        };

        Ok(cap)
    }
}

fn in_gpa_range(value: f64) -> bool {
    (MIN_GPA..=MAX_GPA).contains(&value)
}

fn check_gpa(gpa: f64) -> Result<()> {
    if in_gpa_range(gpa) {
        Ok(())
    } else {
        Err(AppError::invalid_argument(format!(
            "GPA must be between {} and {}, got {}",
            MIN_GPA, MAX_GPA, gpa
        )))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
