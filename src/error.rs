use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Student not found: {message}")]
    StudentNotFound {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Course not found: {message}")]
    CourseNotFound {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Enrollment blocked: {message}")]
    EnrollmentBlocked {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Course full: {message}")]
    CourseFull {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Prerequisite not met: {message}")]
    PrerequisiteNotMet {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn cause<E>(source: E) -> Option<Cause>
where
    E: std::error::Error + Send + Sync + 'static,
{
    Some(Box::new(source))
}

impl AppError {
    pub fn student_not_found(message: impl Into<String>) -> Self {
        AppError::StudentNotFound {
            message: message.into(),
            source: None,
        }
    }

    pub fn student_not_found_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::StudentNotFound {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn course_not_found(message: impl Into<String>) -> Self {
        AppError::CourseNotFound {
            message: message.into(),
            source: None,
        }
    }

    pub fn course_not_found_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::CourseNotFound {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn enrollment_blocked(message: impl Into<String>) -> Self {
        AppError::EnrollmentBlocked {
            message: message.into(),
            source: None,
        }
    }

    pub fn enrollment_blocked_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::EnrollmentBlocked {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn course_full(message: impl Into<String>) -> Self {
        AppError::CourseFull {
            message: message.into(),
            source: None,
        }
    }

    pub fn course_full_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::CourseFull {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn prerequisite_not_met(message: impl Into<String>) -> Self {
        AppError::PrerequisiteNotMet {
            message: message.into(),
            source: None,
        }
    }

    pub fn prerequisite_not_met_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::PrerequisiteNotMet {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_argument_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::InvalidArgument {
            message: message.into(),
            source: cause(source),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AppError::Storage {
            message: message.into(),
            source: None,
        }
    }

    pub fn storage_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::Storage {
            message: message.into(),
            source: cause(source),
        }
    }

    /// Stable identifier for the error kind, independent of the message text.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::StudentNotFound { .. } => "STUDENT_NOT_FOUND",
            AppError::CourseNotFound { .. } => "COURSE_NOT_FOUND",
            AppError::EnrollmentBlocked { .. } => "ENROLLMENT_BLOCKED",
            AppError::CourseFull { .. } => "COURSE_FULL",
            AppError::PrerequisiteNotMet { .. } => "PREREQUISITE_NOT_MET",
            AppError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Notification(_) => "NOTIFICATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}
