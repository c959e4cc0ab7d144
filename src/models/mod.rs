pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use grade::CourseGrade;
pub use student::{AcademicStatus, Student};
