use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::{AcademicStatus, Course, Enrollment, Student};
use crate::notification::NotificationService;
use crate::repository::{CourseRepository, StudentRepository};
use crate::services::grade_calculator::GradeCalculator;

/// Enroll / drop / credit-limit workflow.
///
/// Each call reads, decides, and then writes at most once. The capacity check
/// and the course update are not atomic here; concurrent callers rely on the
/// course repository to refuse a write that pushes a course past capacity.
pub struct EnrollmentService {
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
    notifier: Arc<dyn NotificationService>,
    calculator: GradeCalculator,
}

impl EnrollmentService {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseRepository>,
        notifier: Arc<dyn NotificationService>,
        calculator: GradeCalculator,
    ) -> Self {
        Self {
            students,
            courses,
            notifier,
            calculator,
        }
    }

    pub async fn enroll_course(&self, student_id: &str, course_code: &str) -> Result<Enrollment> {
        let student = self.require_student(student_id).await?;

        if student.is_suspended() {
            warn!("Enrollment blocked: {} is suspended", student_id);
            return Err(AppError::enrollment_blocked(format!(
                "student {} is SUSPENDED",
                student_id
            )));
        }

        let mut course = self.require_course(course_code).await?;

        if !course.has_open_seat() {
            warn!(
                "Course full: {} ({}/{})",
                course_code,
                course.enrolled_count(),
                course.capacity
            );
            return Err(AppError::course_full(format!(
                "{} has reached its capacity of {}",
                course_code, course.capacity
            )));
        }

        if !self.courses.is_prerequisite_met(student_id, course_code).await? {
            warn!("Prerequisite not met: {} for {}", student_id, course_code);
            return Err(AppError::prerequisite_not_met(format!(
                "student {} has not completed the prerequisites of {}",
                student_id, course_code
            )));
        }

        course.record_enrollment();
        self.courses.update(&course).await?;

        let enrollment = Enrollment::approved(student_id, course_code);
        info!(
            "Enrolled {} in {} ({}/{})",
            student_id,
            course_code,
            course.enrolled_count(),
            course.capacity
        );

        self.notify(
            &student,
            "Enrollment Confirmation",
            &format!(
                "Dear {}, you have been enrolled in {} ({}).",
                student.name, course.course_name, course.course_code
            ),
        )
        .await;

        Ok(enrollment)
    }

    pub async fn drop_course(&self, student_id: &str, course_code: &str) -> Result<()> {
        let student = self.require_student(student_id).await?;
        let mut course = self.require_course(course_code).await?;

        course.record_drop();
        self.courses.update(&course).await?;
        info!(
            "Dropped {} from {} ({}/{})",
            student_id,
            course_code,
            course.enrolled_count(),
            course.capacity
        );

        self.notify(
            &student,
            "Course Drop Confirmation",
            &format!(
                "Dear {}, you have dropped {} ({}).",
                student.name, course.course_name, course.course_code
            ),
        )
        .await;

        Ok(())
    }

    /// True when `requested_credits` is within the student's GPA-based cap.
    pub async fn validate_credit_limit(
        &self,
        student_id: &str,
        requested_credits: u32,
    ) -> Result<bool> {
        let student = self.require_student(student_id).await?;
        let max_credits = self.calculator.calculate_max_credits(student.gpa)?;

        let allowed = requested_credits <= max_credits;
        debug!(
            "Credit check for {}: requested {}, cap {} (gpa {}) -> {}",
            student_id, requested_credits, max_credits, student.gpa, allowed
        );
        Ok(allowed)
    }

    /// Re-derives the student's standing from GPA and semester, persisting it
    /// only when it changed.
    pub async fn refresh_academic_status(&self, student_id: &str) -> Result<AcademicStatus> {
        let student = self.require_student(student_id).await?;
        let status = self
            .calculator
            .determine_academic_status(student.gpa, student.semester)?;

        if status != student.academic_status() {
            info!(
                "Academic status of {} changed: {} -> {}",
                student_id,
                student.academic_status(),
                status
            );
            let updated = student.with_academic_status(status);
            self.students.update(&updated).await?;
        }

        Ok(status)
    }

    async fn require_student(&self, student_id: &str) -> Result<Student> {
        self.students.find_by_id(student_id).await?.ok_or_else(|| {
            warn!("Student not found: {}", student_id);
            AppError::student_not_found(student_id.to_string())
        })
    }

    async fn require_course(&self, course_code: &str) -> Result<Course> {
        self.courses
            .find_by_course_code(course_code)
            .await?
            .ok_or_else(|| {
                warn!("Course not found: {}", course_code);
                AppError::course_not_found(course_code.to_string())
            })
    }

    // Delivery failures are logged, never surfaced to the caller.
    async fn notify(&self, student: &Student, subject: &str, body: &str) {
        if let Err(e) = self.notifier.send_email(&student.email, subject, body).await {
            warn!("Failed to notify {}: {}", student.email, e);
        }
    }
}
