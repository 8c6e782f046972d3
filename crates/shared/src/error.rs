//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested data does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The accounting service failed or returned an error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Local file could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (sysexits.h values).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 65,
            Self::NotFound(_) => 66,
            Self::ExternalService(_) => 69,
            Self::Internal(_) => 70,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Returns the stable error code used in machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
