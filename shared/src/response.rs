//! API Response envelope
//!
//! Every backend endpoint wraps its payload in the same envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "error": null,
//!     "message": "Company created"
//! }
//! ```
//!
//! `success` is authoritative: a body with `success != true` is a failure
//! even when the transport status was 2xx.

use crate::error::{HttpError, HttpResult};
use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded (authoritative, not the HTTP status)
    pub success: bool,
    /// Response payload (present on success, may be absent for e.g. logout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Machine-oriented error string (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success envelope with data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Create a failure envelope
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// The envelope's error message, preferring `error` over `message`
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "request failed".to_string())
    }

    /// Convert the envelope into a result, honoring the `success` flag.
    ///
    /// `status` is the transport status the envelope arrived with. A failure
    /// that rode in on a 2xx classifies as Generic; otherwise the status
    /// code decides the error kind. A successful envelope may legitimately
    /// carry no data (logout, deletes), hence `Option<T>`.
    pub fn into_result(self, status: u16) -> HttpResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        let message = self.error_message();
        if (200..300).contains(&status) {
            Err(HttpError::generic(message))
        } else {
            Err(HttpError::from_status(status, message))
        }
    }
}
