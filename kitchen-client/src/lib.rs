//! Kitchen Client - HTTP client for the Kitchen Solutions backend
//!
//! Provides the request client (configuration merge, interceptor chains,
//! timeout race, status classification, bounded retry), the session store,
//! the notice queue, and typed API surfaces for every backend entity.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod notice;
pub mod session;

pub use config::{ClientConfig, RequestConfig, RetryPolicy};
pub use error::{ClientError, ClientResult};
pub use crate::http::{HttpClient, HttpClientBuilder, MultipartFile, RawResponse, Transport};
pub use interceptor::{
    BearerAuth, ErrorInterceptor, ErrorLogger, RequestContext, RequestInterceptor, RequestLogger,
    ResponseInterceptor,
};
pub use notice::{Notice, NoticeQueue};
pub use session::{MemoryTokenStore, SessionStore, TokenStore};

// Re-export shared types for convenience
pub use shared::{
    ApiResponse, ErrorSurface, HttpError, HttpErrorKind, HttpResult, ModuleName, PermissionAction,
    PermissionSet, Role,
};
