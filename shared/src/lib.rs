//! Shared types for the Kitchen Solutions client
//!
//! Common types used across the client crates: the HTTP error taxonomy,
//! the API response envelope, the permission resolver, and entity models.

pub mod error;
pub mod models;
pub mod permissions;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorSurface, HttpError, HttpErrorKind, HttpResult};
pub use permissions::{Access, ModuleName, PermissionAction, PermissionSet, Role, resolve};
pub use response::ApiResponse;
