//! Unified error system for the Kitchen Solutions client
//!
//! This module provides the client-side error taxonomy:
//! - [`HttpErrorKind`]: closed classification of failures, derived from the
//!   HTTP status code via a fixed mapping table
//! - [`HttpError`]: the error type every failed call produces, carrying the
//!   kind, the numeric status (0 for transport-level failures), a message,
//!   and optionally the raw server response body
//! - [`ErrorSurface`]: where the UI should present an error (banner vs inline)
//!
//! # Example
//!
//! ```
//! use shared::error::{HttpError, HttpErrorKind};
//!
//! // Classify a failed response by status
//! let err = HttpError::from_status(404, "branch not found");
//! assert_eq!(err.kind, HttpErrorKind::NotFound);
//!
//! // Transport failure before any response was received
//! let err = HttpError::network("connection refused");
//! assert_eq!(err.status, 0);
//! ```

mod kind;
mod types;

pub use kind::{HttpErrorKind, is_retryable_status};
pub use types::{ErrorSurface, HttpError, HttpResult};
