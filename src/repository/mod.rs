pub mod in_memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Course, Student};

pub use in_memory::{InMemoryCourseRepository, InMemoryStudentRepository};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, student_id: &str) -> Result<Option<Student>>;
    async fn update(&self, student: &Student) -> Result<()>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>>;
    /// Persists the full course state.
    async fn update(&self, course: &Course) -> Result<()>;
    async fn is_prerequisite_met(&self, student_id: &str, course_code: &str) -> Result<bool>;
}
