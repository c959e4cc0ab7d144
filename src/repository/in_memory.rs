use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::{Course, Student};

use super::{CourseRepository, StudentRepository};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::storage("in-memory store lock poisoned"))
}

/// Student store backed by a `HashMap`, keyed by student id.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<HashMap<String, Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        let map = students
            .into_iter()
            .map(|s| (s.student_id.clone(), s))
            .collect();
        Self {
            students: Mutex::new(map),
        }
    }

    pub fn insert(&self, student: Student) -> Result<()> {
        lock(&self.students)?.insert(student.student_id.clone(), student);
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(lock(&self.students)?.get(student_id).cloned())
    }

    async fn update(&self, student: &Student) -> Result<()> {
        let mut students = lock(&self.students)?;
        match students.get_mut(&student.student_id) {
            Some(existing) => {
                *existing = student.clone();
                Ok(())
            }
            None => Err(AppError::student_not_found(student.student_id.clone())),
        }
    }
}

/// Course store plus the completed-course history used for prerequisite checks.
///
/// `update` refuses a write that raises the enrolled count past capacity, so the
/// seat limit holds even when two enrollments race on a stale read. Writes that
/// keep or lower the count always go through.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<HashMap<String, Course>>,
    completed: Mutex<HashMap<String, HashSet<String>>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        let map = courses
            .into_iter()
            .map(|c| (c.course_code.clone(), c))
            .collect();
        Self {
            courses: Mutex::new(map),
            completed: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, course: Course) -> Result<()> {
        lock(&self.courses)?.insert(course.course_code.clone(), course);
        Ok(())
    }

    /// Marks `course_code` as passed by `student_id`.
    pub fn record_completion(&self, student_id: &str, course_code: &str) -> Result<()> {
        lock(&self.completed)?
            .entry(student_id.to_string())
            .or_default()
            .insert(course_code.to_string());
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>> {
        Ok(lock(&self.courses)?.get(course_code).cloned())
    }

    async fn update(&self, course: &Course) -> Result<()> {
        let mut courses = lock(&self.courses)?;
        let existing = courses
            .get_mut(&course.course_code)
            .ok_or_else(|| AppError::course_not_found(course.course_code.clone()))?;

        let grows = course.enrolled_count() > existing.enrolled_count();
        if grows && course.enrolled_count() > course.capacity {
            return Err(AppError::course_full(format!(
                "{} would hold {} students with capacity {}",
                course.course_code,
                course.enrolled_count(),
                course.capacity
            )));
        }

        *existing = course.clone();
        Ok(())
    }

    async fn is_prerequisite_met(&self, student_id: &str, course_code: &str) -> Result<bool> {
        let prerequisites = match lock(&self.courses)?.get(course_code) {
            Some(course) => course.prerequisites.clone(),
            None => return Ok(false),
        };

        let completed = lock(&self.completed)?;
        let passed = completed.get(student_id);
        Ok(prerequisites
            .iter()
            .all(|code| passed.is_some_and(|set| set.contains(code))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AcademicStatus;

    fn student() -> Student {
        Student::new(
            "S001",
            "Arga",
            "arga@mail.com",
            "RKS",
            3,
            3.5,
            AcademicStatus::Active,
        )
    }

    #[tokio::test]
    async fn test_student_find_and_update() {
        let repo = InMemoryStudentRepository::with_students(vec![student()]);

        let found = repo.find_by_id("S001").await.unwrap().expect("student exists");
        assert_eq!(found.name, "Arga");
        assert!(repo.find_by_id("S404").await.unwrap().is_none());

        let updated = found.with_academic_status(AcademicStatus::Probation);
        repo.update(&updated).await.unwrap();
        let reloaded = repo.find_by_id("S001").await.unwrap().unwrap();
        assert_eq!(reloaded.academic_status(), AcademicStatus::Probation);
    }

    #[tokio::test]
    async fn test_student_update_unknown() {
        let repo = InMemoryStudentRepository::new();
        let err = repo.update(&student()).await.unwrap_err();
        assert!(matches!(err, AppError::StudentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_course_update_respects_capacity() {
        let repo = InMemoryCourseRepository::with_courses(vec![Course::new(
            "IF101", "Algoritma", 3, 1, 0, "Dr. Dosen",
        )]);

        let mut course = repo.find_by_course_code("IF101").await.unwrap().unwrap();
        course.record_enrollment();
        repo.update(&course).await.unwrap();

        // a second writer working from the same stale read overshoots
        let mut stale = course.clone();
        stale.record_enrollment();
        let err = repo.update(&stale).await.unwrap_err();
        assert!(matches!(err, AppError::CourseFull { .. }));

        let stored = repo.find_by_course_code("IF101").await.unwrap().unwrap();
        assert_eq!(stored.enrolled_count(), 1);
    }

    #[tokio::test]
    async fn test_course_update_lowering_overfull_count() {
        // capacity was cut below the current head count
        let repo = InMemoryCourseRepository::with_courses(vec![Course::new(
            "IF101", "Algoritma", 3, 30, 32, "Dr. Dosen",
        )]);

        let mut course = repo.find_by_course_code("IF101").await.unwrap().unwrap();
        course.record_drop();
        repo.update(&course).await.unwrap();

        let stored = repo.find_by_course_code("IF101").await.unwrap().unwrap();
        assert_eq!(stored.enrolled_count(), 31);

        // unchanged count is also accepted
        repo.update(&stored).await.unwrap();

        let mut grown = stored.clone();
        grown.record_enrollment();
        let err = repo.update(&grown).await.unwrap_err();
        assert!(matches!(err, AppError::CourseFull { .. }));
    }

    #[tokio::test]
    async fn test_course_update_unknown() {
        let repo = InMemoryCourseRepository::new();
        let course = Course::new("IF999", "Ghost", 3, 10, 0, "Nobody");
        let err = repo.update(&course).await.unwrap_err();
        assert!(matches!(err, AppError::CourseNotFound { .. }));
    }

    #[tokio::test]
    async fn test_prerequisites() {
        let repo = InMemoryCourseRepository::with_courses(vec![
            Course::new("IF101", "Algoritma", 3, 40, 0, "Dr. Dosen"),
            Course::new("IF201", "Struktur Data", 3, 40, 0, "Dr. Dosen")
                .with_prerequisites(["IF101", "MA101"]),
        ]);

        assert!(repo.is_prerequisite_met("S001", "IF101").await.unwrap());
        assert!(!repo.is_prerequisite_met("S001", "IF201").await.unwrap());
        assert!(!repo.is_prerequisite_met("S001", "IF999").await.unwrap());

        repo.record_completion("S001", "IF101").unwrap();
        assert!(!repo.is_prerequisite_met("S001", "IF201").await.unwrap());

        repo.record_completion("S001", "MA101").unwrap();
        assert!(repo.is_prerequisite_met("S001", "IF201").await.unwrap());
        assert!(!repo.is_prerequisite_met("S002", "IF201").await.unwrap());
    }
}
