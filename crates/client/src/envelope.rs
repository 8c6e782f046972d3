//! Response envelope of the accounting service.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// `{ success, message, data }` wrapper used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Payload.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` when `success` is false and `MissingData` when no
    /// payload is present.
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| "no message".to_string()),
            ));
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

/// Extracts the `message` field from an error body, if it is an envelope.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}
