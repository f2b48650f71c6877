//! Error kind classification
//!
//! Failed calls are classified into a closed set of kinds, chosen
//! deterministically from the HTTP status code. Transport-level failures
//! (no response received at all) are always `Network`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status codes that are eligible for automatic retry.
///
/// 408/429 are transient client-side conditions; 5xx gateway and
/// availability errors are transient server-side conditions. Every other
/// 4xx is a caller mistake and retrying it is pointless.
pub const RETRYABLE_STATUSES: &[u16] = &[408, 429, 500, 502, 503, 504];

/// Check whether a status code belongs to the retryable set.
///
/// Status 0 (transport failure, no response) is retry-eligible as well,
/// subject to the caller's retry policy.
#[inline]
pub fn is_retryable_status(status: u16) -> bool {
    status == 0 || RETRYABLE_STATUSES.contains(&status)
}

/// Closed classification of HTTP call failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HttpErrorKind {
    /// Transport-level failure or timeout; no response was received
    Network,
    /// 400 Bad Request (malformed or rejected input)
    Validation,
    /// 401 Unauthorized (missing or expired credentials)
    Authentication,
    /// 403 Forbidden (valid credentials, insufficient permission)
    Authorization,
    /// 404 Not Found
    NotFound,
    /// Any 5xx server-side error
    Server,
    /// Any other non-success status
    Generic,
}

impl HttpErrorKind {
    /// Map a status code to its error kind.
    ///
    /// The mapping is fixed and total: every non-success status resolves to
    /// exactly one kind. Status 0 means no response was ever received.
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => Self::Network,
            400 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            500..=599 => Self::Server,
            _ => Self::Generic,
        }
    }

    /// Get the string name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Server => "server",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
