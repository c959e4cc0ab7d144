pub mod config;
pub mod error;
pub mod models;
pub mod notification;
pub mod repository;
pub mod services;
pub mod telemetry;

pub use config::EngineConfig;
pub use error::{AppError, Result};
pub use services::{EnrollmentService, GradeCalculator};
