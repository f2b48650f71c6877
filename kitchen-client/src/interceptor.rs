//! Interceptor chains
//!
//! Three ordered chains of named steps run around every call:
//!
//! - request interceptors receive and return the outgoing
//!   [`RequestContext`]; an error here aborts the call
//! - response interceptors observe or transform the successful payload
//! - error interceptors observe a failure; the error always propagates,
//!   since the chain cannot convert a failure into a success
//!
//! Chains are registered at client build time and run in registration
//! order. The builder consumes the lists, so registration after traffic
//! has started is not expressible.

use crate::config::RetryPolicy;
use crate::session::SessionStore;
use shared::{HttpError, HttpResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// The fully merged description of one outgoing call.
///
/// Built once by the merge step, then passed through the request chain and
/// consumed by dispatch.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: http::Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub include_credentials: bool,
}

/// A named step that may mutate the outgoing request
pub trait RequestInterceptor: Send + Sync {
    /// Step name, used in logs
    fn name(&self) -> &str;

    /// Receive the context, return it (possibly mutated)
    fn intercept(&self, ctx: RequestContext) -> HttpResult<RequestContext>;
}

/// A named step that observes or transforms a successful payload
pub trait ResponseInterceptor: Send + Sync {
    fn name(&self) -> &str;

    /// Receive the payload, return it (possibly transformed)
    fn intercept(&self, body: serde_json::Value) -> serde_json::Value;
}

/// A named step that observes an unrecovered failure.
///
/// Side effects only (logging, telemetry). The signature returns nothing,
/// so the chain has no way to swallow the error.
pub trait ErrorInterceptor: Send + Sync {
    fn name(&self) -> &str;

    fn observe(&self, error: &HttpError);
}

// ============================================================================
// Built-in interceptors
// ============================================================================

/// Injects `Authorization: Bearer <token>` from the session store.
///
/// Does nothing when no token is stored or the call already carries an
/// Authorization header (per-call override wins).
pub struct BearerAuth {
    session: Arc<SessionStore>,
}

impl BearerAuth {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn name(&self) -> &str {
        "bearer_auth"
    }

    fn intercept(&self, mut ctx: RequestContext) -> HttpResult<RequestContext> {
        let already_set = ctx.headers.keys().any(|k| k.eq_ignore_ascii_case("authorization"));
        if !already_set {
            if let Some(token) = self.session.token() {
                ctx.headers
                    .insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }
        Ok(ctx)
    }
}

/// Logs every outgoing call at debug level
pub struct RequestLogger;

impl RequestInterceptor for RequestLogger {
    fn name(&self) -> &str {
        "request_logger"
    }

    fn intercept(&self, ctx: RequestContext) -> HttpResult<RequestContext> {
        tracing::debug!(method = %ctx.method, path = %ctx.path, "outgoing request");
        Ok(ctx)
    }
}

/// Logs unrecovered failures, banner-surface ones at warn level.
///
/// Statuses in the quiet set are skipped entirely; a 401 on auto-login is
/// expected noise, not an incident. The error still propagates.
pub struct ErrorLogger {
    quiet_statuses: Vec<u16>,
}

impl ErrorLogger {
    pub fn new() -> Self {
        Self {
            quiet_statuses: Vec::new(),
        }
    }

    /// Suppress logging for an expected status
    pub fn quiet(mut self, status: u16) -> Self {
        self.quiet_statuses.push(status);
        self
    }
}

impl Default for ErrorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorInterceptor for ErrorLogger {
    fn name(&self) -> &str {
        "error_logger"
    }

    fn observe(&self, error: &HttpError) {
        if self.quiet_statuses.contains(&error.status) {
            return;
        }
        match error.surface() {
            shared::ErrorSurface::Banner => {
                tracing::warn!(kind = %error.kind, status = error.status, "request failed: {}", error.message);
            }
            shared::ErrorSurface::Inline => {
                tracing::debug!(kind = %error.kind, status = error.status, "request rejected: {}", error.message);
            }
        }
    }
}
