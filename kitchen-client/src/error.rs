//! Client error types

use shared::HttpError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// A call failed with a classified HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for client construction and operations
pub type ClientResult<T> = Result<T, ClientError>;
