pub mod enrollment_service;
pub mod grade_calculator;

pub use enrollment_service::EnrollmentService;
pub use grade_calculator::GradeCalculator;
