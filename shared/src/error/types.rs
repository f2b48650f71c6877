//! The client error type and its UI surface routing

use super::kind::HttpErrorKind;
use serde_json::Value;
use thiserror::Error;

/// Where the UI should present an error.
///
/// Infrastructure failures (network, timeout, server) surface as a
/// dismissible, auto-expiring banner; everything else surfaces inline next
/// to the relevant input. Keeping the split here means every caller routes
/// errors the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    /// Transient infrastructure banner (auto-expiring)
    Banner,
    /// Field-level message next to the relevant input
    Inline,
}

/// The error produced by every failed HTTP call
///
/// Exactly one of these is produced per failure, with the kind chosen
/// deterministically from the status code. Callers never see raw transport
/// exceptions.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message} (status {status})")]
pub struct HttpError {
    /// Classification of the failure
    pub kind: HttpErrorKind,
    /// HTTP status code; 0 when no response was received
    pub status: u16,
    /// Human-readable message
    pub message: String,
    /// Raw server response body, when one was received and parsed
    pub body: Option<Value>,
}

impl HttpError {
    /// Classify a failed response by its status code
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::from_status(status),
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Attach the parsed response body to this error
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Transport-level failure: nothing came back from the server
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Network,
            status: 0,
            message: message.into(),
            body: None,
        }
    }

    /// Request timed out while waiting for a response.
    ///
    /// A timeout is a Network-class failure, not a Server error: no
    /// response was received, so nothing is known about the server side.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::network(message)
    }

    /// Validation failure (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_status(400, message)
    }

    /// Authentication required (401)
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::from_status(401, message)
    }

    /// Permission denied (403)
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::from_status(403, message)
    }

    /// Resource not found (404)
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::from_status(404, format!("{} not found", r))
    }

    /// Server-side failure (5xx)
    pub fn server(message: impl Into<String>) -> Self {
        Self::from_status(500, message)
    }

    /// Envelope-level failure: transport succeeded but `success != true`
    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: HttpErrorKind::Generic,
            status: 200,
            message: message.into(),
            body: None,
        }
    }

    /// Whether this error is eligible for automatic retry
    pub fn is_retryable(&self) -> bool {
        super::kind::is_retryable_status(self.status)
    }

    /// Which UI surface this error belongs on
    pub fn surface(&self) -> ErrorSurface {
        match self.kind {
            HttpErrorKind::Network | HttpErrorKind::Server => ErrorSurface::Banner,
            _ => ErrorSurface::Inline,
        }
    }
}

/// Result type for HTTP call outcomes
pub type HttpResult<T> = Result<T, HttpError>;
