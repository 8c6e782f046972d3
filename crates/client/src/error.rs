//! Client error types.

use coopbooks_core::reports::ReportError;
use coopbooks_shared::AppError;
use thiserror::Error;

/// Errors raised while fetching trial balances.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No base URL is configured.
    #[error("No accounting service base URL configured (set api.base_url or COOPBOOKS__API__BASE_URL)")]
    MissingBaseUrl,

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The request could not be sent or the response not read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("Accounting service returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, if any.
        message: String,
    },

    /// The service answered `success: false`.
    #[error("Accounting service rejected the request: {0}")]
    Rejected(String),

    /// The body is not the expected envelope.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope carried no `data`.
    #[error("Response has no data")]
    MissingData,

    /// The rows failed validation.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingBaseUrl | ClientError::InvalidBaseUrl(_) => {
                Self::Config(err.to_string())
            }
            ClientError::Status { status: 404, .. } => Self::NotFound(err.to_string()),
            ClientError::Report(_) => Self::Validation(err.to_string()),
            ClientError::Transport(_)
            | ClientError::Status { .. }
            | ClientError::Rejected(_)
            | ClientError::Decode(_)
            | ClientError::MissingData => Self::ExternalService(err.to_string()),
        }
    }
}
