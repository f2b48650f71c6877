//! Client configuration
//!
//! Every call is described by a [`RequestConfig`] merged over the
//! client-wide [`ClientConfig`]: call-specific values win, headers merge
//! additively. The merged result is immutable and consumed once by the
//! execution step.

use std::collections::HashMap;
use std::time::Duration;

/// Retry policy governing automatic re-attempts of a failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Master switch; when false no retry happens regardless of the rest
    pub enabled: bool,
    /// Retry attempts after the initial one
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 2,
            delay: Duration::from_millis(300),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt count and delay
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self {
            enabled: true,
            max_retries,
            delay,
        }
    }

    /// A policy that never retries.
    ///
    /// Recommended for non-idempotent calls such as resource creation.
    pub fn none() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    /// Number of re-attempts this policy allows
    pub fn attempts(&self) -> u32 {
        if self.enabled { self.max_retries } else { 0 }
    }
}

/// Client-wide default configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://api.kitchen.example")
    pub base_url: String,
    /// Headers attached to every call unless overridden per call
    pub headers: HashMap<String, String>,
    /// Default request timeout
    pub timeout: Duration,
    /// Send the HTTP-only session cookie with every call
    pub include_credentials: bool,
    /// Default retry policy
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a configuration with the standard defaults: 30s timeout,
    /// retry on, session cookie included
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HashMap::new(),
            timeout: Duration::from_secs(30),
            include_credentials: true,
            retry: RetryPolicy::default(),
        }
    }

    /// Set a default header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the default request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set whether the session cookie rides along by default
    pub fn with_credentials(mut self, include: bool) -> Self {
        self.include_credentials = include;
        self
    }

    /// Set the default retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

/// Per-call configuration override.
///
/// Absent fields fall back to the client defaults during the merge.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Extra headers; same-named default headers are overridden, the rest
    /// are retained
    pub headers: HashMap<String, String>,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// Override the default timeout
    pub timeout: Option<Duration>,
    /// Override the default retry policy
    pub retry: Option<RetryPolicy>,
    /// Override the default credentials flag
    pub include_credentials: Option<bool>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a call-specific header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Override the timeout for this call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the retry policy for this call
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Shorthand for disabling retries on this call
    pub fn no_retry(self) -> Self {
        self.with_retry(RetryPolicy::none())
    }

    /// Override the credentials flag for this call
    pub fn with_credentials(mut self, include: bool) -> Self {
        self.include_credentials = Some(include);
        self
    }

    /// Merge this override onto the client defaults.
    ///
    /// Returns the effective (headers, query, timeout, retry, credentials)
    /// tuple the dispatcher consumes. Header merge is additive: call
    /// headers win on conflict, unrelated default headers are retained.
    pub fn merge(
        self,
        defaults: &ClientConfig,
    ) -> (
        HashMap<String, String>,
        Vec<(String, String)>,
        Duration,
        RetryPolicy,
        bool,
    ) {
        let mut headers = defaults.headers.clone();
        headers.extend(self.headers);
        (
            headers,
            self.query,
            self.timeout.unwrap_or(defaults.timeout),
            self.retry.unwrap_or_else(|| defaults.retry.clone()),
            self.include_credentials
                .unwrap_or(defaults.include_credentials),
        )
    }
}
