//! HTTP request client
//!
//! Executes a described call against the configured backend, applying the
//! cross-cutting policies uniformly. One call walks a fixed protocol:
//!
//! 1. merge client defaults with per-call overrides
//! 2. run request interceptors (an error here aborts the call)
//! 3. dispatch, racing the configured timeout
//! 4. classify the outcome into a typed error or a payload
//! 5. retry transient failures while the policy has attempts left
//! 6. run response interceptors on success
//! 7. run error interceptors on unrecovered failure
//!
//! Callers never see raw transport exceptions: every failure arrives as a
//! [`HttpError`] with a deterministic kind.

use crate::config::{ClientConfig, RequestConfig};
use crate::error::{ClientError, ClientResult};
use crate::interceptor::{
    ErrorInterceptor, RequestContext, RequestInterceptor, ResponseInterceptor,
};
use crate::session::SessionStore;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiResponse, HttpError, HttpResult};
use std::sync::Arc;

/// Raw transport outcome: a status and the body text
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One file for a multipart upload
#[derive(Debug, Clone)]
pub struct MultipartFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Seam over the actual network send.
///
/// Production uses [`ReqwestTransport`]; tests inject a scripted fake to
/// pin down retry and ordering behavior deterministically.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the call. A transport-level failure (DNS, refused connection,
    /// broken pipe) is returned as a Network error with status 0.
    async fn send(&self, base_url: &str, ctx: &RequestContext) -> HttpResult<RawResponse>;

    /// Issue a multipart upload
    async fn send_multipart(
        &self,
        base_url: &str,
        ctx: &RequestContext,
        file: &MultipartFile,
    ) -> HttpResult<RawResponse>;
}

/// Production transport over reqwest
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the transport.
    ///
    /// The reqwest client carries no timeout of its own; the request client
    /// races every dispatch against the per-call timeout instead. The
    /// cookie jar backs `include_credentials`: session cookies set by the
    /// backend ride along on subsequent calls.
    pub fn new(cookie_store: bool) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .cookie_store(cookie_store)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build reqwest client: {}", e)))?;
        Ok(Self { client })
    }

    fn url(base_url: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(
        &self,
        base_url: &str,
        ctx: &RequestContext,
    ) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .request(ctx.method.clone(), Self::url(base_url, &ctx.path));
        if !ctx.query.is_empty() {
            request = request.query(&ctx.query);
        }
        for (name, value) in &ctx.headers {
            request = request.header(name, value);
        }
        request
    }

    async fn finish(response: reqwest::Response) -> HttpResult<RawResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::network(format!("failed to read response body: {}", e)))?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, base_url: &str, ctx: &RequestContext) -> HttpResult<RawResponse> {
        let mut request = self.request(base_url, ctx);
        if let Some(body) = &ctx.body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| HttpError::network(e.to_string()))?;
        Self::finish(response).await
    }

    async fn send_multipart(
        &self,
        base_url: &str,
        ctx: &RequestContext,
        file: &MultipartFile,
    ) -> HttpResult<RawResponse> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| HttpError::generic(format!("invalid content type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part(file.field.clone(), part);
        let response = self
            .request(base_url, ctx)
            .multipart(form)
            .send()
            .await
            .map_err(|e| HttpError::network(e.to_string()))?;
        Self::finish(response).await
    }
}

/// The request client
pub struct HttpClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    request_chain: Vec<Arc<dyn RequestInterceptor>>,
    response_chain: Vec<Arc<dyn ResponseInterceptor>>,
    error_chain: Vec<Arc<dyn ErrorInterceptor>>,
    session: Arc<SessionStore>,
}

impl HttpClient {
    /// Start building a client over the given configuration
    pub fn builder(config: ClientConfig) -> HttpClientBuilder {
        HttpClientBuilder::new(config)
    }

    /// The session store this client reads tokens from
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ========== Public operations ==========

    /// GET a typed payload
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let ctx = self.build_context(http::Method::GET, path, None, overrides);
        self.execute(ctx, None).await
    }

    /// POST a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let body = to_body(body)?;
        let ctx = self.build_context(http::Method::POST, path, Some(body), overrides);
        self.execute(ctx, None).await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let ctx = self.build_context(http::Method::POST, path, None, overrides);
        self.execute(ctx, None).await
    }

    /// PUT a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let body = to_body(body)?;
        let ctx = self.build_context(http::Method::PUT, path, Some(body), overrides);
        self.execute(ctx, None).await
    }

    /// PATCH a JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let body = to_body(body)?;
        let ctx = self.build_context(http::Method::PATCH, path, Some(body), overrides);
        self.execute(ctx, None).await
    }

    /// DELETE a resource
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let ctx = self.build_context(http::Method::DELETE, path, None, overrides);
        self.execute(ctx, None).await
    }

    /// POST a multipart file upload
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file: MultipartFile,
        overrides: Option<RequestConfig>,
    ) -> HttpResult<T> {
        let ctx = self.build_context(http::Method::POST, path, None, overrides);
        self.execute(ctx, Some(file)).await
    }

    // ========== Execution protocol ==========

    /// Step 1: merge defaults with the per-call override
    fn build_context(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Value>,
        overrides: Option<RequestConfig>,
    ) -> RequestContext {
        let (headers, query, timeout, retry, include_credentials) =
            overrides.unwrap_or_default().merge(&self.config);
        RequestContext {
            method,
            path: path.to_string(),
            headers,
            query,
            body,
            timeout,
            retry,
            include_credentials,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
        file: Option<MultipartFile>,
    ) -> HttpResult<T> {
        // Step 2: request interceptors, in registration order. A failure
        // here skips dispatch entirely and goes straight to error handling.
        let mut ctx = ctx;
        for interceptor in &self.request_chain {
            match interceptor.intercept(ctx) {
                Ok(next) => ctx = next,
                Err(err) => {
                    tracing::debug!(step = interceptor.name(), "request interceptor aborted call");
                    return Err(self.fail(err));
                }
            }
        }

        // Steps 3-5: dispatch, classify, retry. Attempts of one logical
        // call are strictly sequential.
        let mut remaining = ctx.retry.attempts();
        let outcome = loop {
            match self.dispatch_once(&ctx, file.as_ref()).await {
                Ok(payload) => break Ok(payload),
                Err(err) if err.is_retryable() && remaining > 0 => {
                    remaining -= 1;
                    tracing::warn!(
                        status = err.status,
                        remaining,
                        path = %ctx.path,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(ctx.retry.delay).await;
                }
                Err(err) => break Err(err),
            }
        };

        match outcome {
            Ok(mut payload) => {
                // Step 6: response interceptors observe/transform
                for interceptor in &self.response_chain {
                    payload = interceptor.intercept(payload);
                }
                serde_json::from_value(payload)
                    .map_err(|e| self.fail(HttpError::generic(format!("invalid response payload: {}", e))))
            }
            // Step 7: error interceptors observe, error propagates
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Steps 3-4 for one attempt: send with the timeout race, classify
    async fn dispatch_once(
        &self,
        ctx: &RequestContext,
        file: Option<&MultipartFile>,
    ) -> HttpResult<Value> {
        let send = async {
            match file {
                Some(file) => {
                    self.transport
                        .send_multipart(&self.config.base_url, ctx, file)
                        .await
                }
                None => self.transport.send(&self.config.base_url, ctx).await,
            }
        };
        // Timeout expiry is a Network-class failure: no response was
        // received. Aborting the underlying transport call is best-effort.
        let raw = match tokio::time::timeout(ctx.timeout, send).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(HttpError::timeout(format!(
                    "request timed out after {:?}",
                    ctx.timeout
                )));
            }
        };
        classify(raw)
    }

    /// Run the error chain; the error always comes back out
    fn fail(&self, err: HttpError) -> HttpError {
        for interceptor in &self.error_chain {
            interceptor.observe(&err);
        }
        err
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> HttpResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| HttpError::generic(format!("failed to serialize request body: {}", e)))
}

/// Classify a raw outcome into payload or typed error.
///
/// A 2xx status is necessary but not sufficient: the envelope's `success`
/// flag is authoritative, so a 2xx body with `success=false` still fails
/// (as Generic). Non-2xx statuses classify through the fixed kind table,
/// with the envelope's error string as the message when one parses.
fn classify(raw: RawResponse) -> HttpResult<Value> {
    let parsed: Option<Value> = serde_json::from_str(&raw.body).ok();

    if (200..300).contains(&raw.status) {
        let Some(value) = parsed else {
            if raw.body.trim().is_empty() {
                // 204-style success with no envelope
                return Ok(Value::Null);
            }
            return Err(HttpError::generic("response body is not valid JSON"));
        };
        let envelope: ApiResponse<Value> = serde_json::from_value(value.clone())
            .map_err(|e| {
                HttpError::generic(format!("malformed response envelope: {}", e))
                    .with_body(value.clone())
            })?;
        match envelope.into_result(raw.status) {
            Ok(data) => Ok(data.unwrap_or(Value::Null)),
            Err(err) => Err(err.with_body(value)),
        }
    } else {
        let message = parsed
            .as_ref()
            .and_then(|v| serde_json::from_value::<ApiResponse<Value>>(v.clone()).ok())
            .map(|envelope| envelope.error_message())
            .unwrap_or_else(|| format!("HTTP {}", raw.status));
        let mut err = HttpError::from_status(raw.status, message);
        if let Some(value) = parsed {
            err = err.with_body(value);
        }
        Err(err)
    }
}

/// Builder for [`HttpClient`].
///
/// Interceptors are registered here and only here; after `build()` the
/// chains are immutable, so in-flight calls always see a consistent chain.
pub struct HttpClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    request_chain: Vec<Arc<dyn RequestInterceptor>>,
    response_chain: Vec<Arc<dyn ResponseInterceptor>>,
    error_chain: Vec<Arc<dyn ErrorInterceptor>>,
    session: Option<Arc<SessionStore>>,
}

impl HttpClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            request_chain: Vec::new(),
            response_chain: Vec::new(),
            error_chain: Vec::new(),
            session: None,
        }
    }

    /// Use the given session store instead of a fresh in-memory one
    pub fn session(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Inject a transport (tests)
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Append a request interceptor to the chain
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_chain.push(interceptor);
        self
    }

    /// Append a response interceptor to the chain
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_chain.push(interceptor);
        self
    }

    /// Append an error interceptor to the chain
    pub fn error_interceptor(mut self, interceptor: Arc<dyn ErrorInterceptor>) -> Self {
        self.error_chain.push(interceptor);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` when the base URL is empty or the
    /// transport cannot be constructed.
    pub fn build(self) -> ClientResult<HttpClient> {
        if self.config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        let session = self
            .session
            .unwrap_or_else(|| Arc::new(SessionStore::in_memory()));
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.include_credentials)?),
        };
        Ok(HttpClient {
            config: self.config,
            transport,
            request_chain: self.request_chain,
            response_chain: self.response_chain,
            error_chain: self.error_chain,
            session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use serde_json::json;
    use shared::HttpErrorKind;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    /// Transport that replays scripted outcomes and records what it saw
    struct FakeTransport {
        outcomes: Mutex<VecDeque<HttpResult<RawResponse>>>,
        seen: Mutex<Vec<RequestContext>>,
        calls: AtomicU32,
        delay: Option<Duration>,
    }

    impl FakeTransport {
        fn scripted(outcomes: Vec<HttpResult<RawResponse>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                seen: Mutex::new(Vec::new()),
                calls: AtomicU32::new(0),
                delay: None,
            })
        }

        fn slow(delay: Duration, outcomes: Vec<HttpResult<RawResponse>>) -> Arc<Self> {
            Arc::new(Self {
                outcomes: Mutex::new(outcomes.into()),
                seen: Mutex::new(Vec::new()),
                calls: AtomicU32::new(0),
                delay: Some(delay),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_seen(&self) -> RequestContext {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, _base_url: &str, ctx: &RequestContext) -> HttpResult<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(ctx.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left")
        }

        async fn send_multipart(
            &self,
            base_url: &str,
            ctx: &RequestContext,
            _file: &MultipartFile,
        ) -> HttpResult<RawResponse> {
            self.send(base_url, ctx).await
        }
    }

    fn ok_body(data: Value) -> RawResponse {
        RawResponse {
            status: 200,
            body: json!({"success": true, "data": data}).to_string(),
        }
    }

    fn err_body(status: u16, error: &str) -> RawResponse {
        RawResponse {
            status,
            body: json!({"success": false, "error": error}).to_string(),
        }
    }

    fn client(transport: Arc<FakeTransport>, config: ClientConfig) -> HttpClient {
        HttpClient::builder(config)
            .transport(transport)
            .build()
            .unwrap()
    }

    fn fast_retry(max_retries: u32) -> RetryPolicy {
        RetryPolicy::new(max_retries, Duration::from_millis(2))
    }

    #[tokio::test]
    async fn test_successful_get() {
        let transport = FakeTransport::scripted(vec![Ok(ok_body(json!({"answer": 42})))]);
        let client = client(transport.clone(), ClientConfig::new("http://api"));

        let value: Value = client.get("/api/ping", None).await.unwrap();
        assert_eq!(value["answer"], 42);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_503_retried_until_exhausted_then_server_error() {
        let transport = FakeTransport::scripted(vec![
            Ok(err_body(503, "unavailable")),
            Ok(err_body(503, "unavailable")),
            Ok(err_body(503, "unavailable")),
        ]);
        let config = ClientConfig::new("http://api").with_retry(fast_retry(2));
        let client = client(transport.clone(), config);

        let err = client.get::<Value>("/api/companies", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Server);
        assert_eq!(err.status, 503);
        // initial attempt + 2 retries
        assert_eq!(transport.calls(), 3);
    }

    #[tokio::test]
    async fn test_retry_recovers_on_transient_failure() {
        let transport = FakeTransport::scripted(vec![
            Ok(err_body(503, "unavailable")),
            Ok(ok_body(json!("recovered"))),
        ]);
        let config = ClientConfig::new("http://api").with_retry(fast_retry(3));
        let client = client(transport.clone(), config);

        let value: String = client.get("/api/companies", None).await.unwrap();
        assert_eq!(value, "recovered");
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_401_is_never_retried() {
        let transport = FakeTransport::scripted(vec![Ok(err_body(401, "session expired"))]);
        let config = ClientConfig::new("http://api").with_retry(fast_retry(5));
        let client = client(transport.clone(), config);

        let err = client.get::<Value>("/api/auth/me", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Authentication);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_retry_disabled_attempts_exactly_once() {
        let transport = FakeTransport::scripted(vec![Ok(err_body(500, "boom"))]);
        let client = client(transport.clone(), ClientConfig::new("http://api"));

        let err = client
            .post::<Value, _>(
                "/api/companies",
                &json!({"name": "Acme"}),
                Some(RequestConfig::new().no_retry()),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Server);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_with_status_zero() {
        let transport =
            FakeTransport::scripted(vec![Err(HttpError::network("dns lookup failed"))]);
        let config = ClientConfig::new("http://api").with_retry(RetryPolicy::none());
        let client = client(transport.clone(), config);

        let err = client.get::<Value>("/api/companies", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Network);
        assert_eq!(err.status, 0);
    }

    #[tokio::test]
    async fn test_timeout_classifies_as_network() {
        let transport = FakeTransport::slow(
            Duration::from_millis(100),
            vec![Ok(ok_body(json!(null)))],
        );
        let config = ClientConfig::new("http://api").with_retry(RetryPolicy::none());
        let client = client(transport.clone(), config);

        let err = client
            .get::<Value>(
                "/api/companies",
                Some(RequestConfig::new().with_timeout(Duration::from_millis(10))),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Network);
        assert_eq!(err.status, 0);
    }

    #[tokio::test]
    async fn test_envelope_failure_on_2xx_is_generic_error() {
        let transport = FakeTransport::scripted(vec![Ok(RawResponse {
            status: 200,
            body: json!({"success": false, "error": "name already taken"}).to_string(),
        })]);
        let client = client(transport.clone(), ClientConfig::new("http://api"));

        let err = client.get::<Value>("/api/companies", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Generic);
        assert_eq!(err.message, "name already taken");
    }

    struct AppendHeader {
        tag: &'static str,
    }

    impl RequestInterceptor for AppendHeader {
        fn name(&self) -> &str {
            self.tag
        }

        fn intercept(&self, mut ctx: RequestContext) -> HttpResult<RequestContext> {
            let value = ctx.headers.remove("x-order").unwrap_or_default();
            ctx.headers
                .insert("x-order".to_string(), format!("{}{}", value, self.tag));
            Ok(ctx)
        }
    }

    #[tokio::test]
    async fn test_request_interceptors_run_in_registration_order() {
        let transport = FakeTransport::scripted(vec![Ok(ok_body(json!(null)))]);
        let client = HttpClient::builder(ClientConfig::new("http://api"))
            .transport(transport.clone())
            .request_interceptor(Arc::new(AppendHeader { tag: "a" }))
            .request_interceptor(Arc::new(AppendHeader { tag: "b" }))
            .build()
            .unwrap();

        let _: Value = client.get("/api/ping", None).await.unwrap();
        // a ran first, its output fed b
        assert_eq!(
            transport.last_seen().headers.get("x-order").map(String::as_str),
            Some("ab")
        );
    }

    struct AbortingInterceptor;

    impl RequestInterceptor for AbortingInterceptor {
        fn name(&self) -> &str {
            "aborting"
        }

        fn intercept(&self, _ctx: RequestContext) -> HttpResult<RequestContext> {
            Err(HttpError::validation("refused before dispatch"))
        }
    }

    #[tokio::test]
    async fn test_request_interceptor_error_aborts_without_dispatch() {
        let transport = FakeTransport::scripted(vec![]);
        let client = HttpClient::builder(ClientConfig::new("http://api"))
            .transport(transport.clone())
            .request_interceptor(Arc::new(AbortingInterceptor))
            .build()
            .unwrap();

        let err = client.get::<Value>("/api/ping", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::Validation);
        assert_eq!(transport.calls(), 0);
    }

    struct Upcase;

    impl ResponseInterceptor for Upcase {
        fn name(&self) -> &str {
            "upcase"
        }

        fn intercept(&self, body: Value) -> Value {
            match body {
                Value::String(s) => Value::String(s.to_uppercase()),
                other => other,
            }
        }
    }

    #[tokio::test]
    async fn test_response_interceptor_transforms_payload() {
        let transport = FakeTransport::scripted(vec![Ok(ok_body(json!("quiet")))]);
        let client = HttpClient::builder(ClientConfig::new("http://api"))
            .transport(transport)
            .response_interceptor(Arc::new(Upcase))
            .build()
            .unwrap();

        let value: String = client.get("/api/ping", None).await.unwrap();
        assert_eq!(value, "QUIET");
    }

    struct CountErrors(AtomicU32);

    impl ErrorInterceptor for CountErrors {
        fn name(&self) -> &str {
            "count_errors"
        }

        fn observe(&self, _error: &HttpError) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_error_interceptor_observes_and_error_still_propagates() {
        let counter = Arc::new(CountErrors(AtomicU32::new(0)));
        let transport = FakeTransport::scripted(vec![Ok(err_body(404, "missing"))]);
        let client = HttpClient::builder(ClientConfig::new("http://api"))
            .transport(transport)
            .error_interceptor(counter.clone())
            .build()
            .unwrap();

        let err = client.get::<Value>("/api/companies/x", None).await.unwrap_err();
        assert_eq!(err.kind, HttpErrorKind::NotFound);
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_per_call_header_reaches_transport() {
        let transport = FakeTransport::scripted(vec![Ok(ok_body(json!(null)))]);
        let config = ClientConfig::new("http://api").with_header("X-Default", "1");
        let client = client(transport.clone(), config);

        let _: Value = client
            .get(
                "/api/ping",
                Some(RequestConfig::new().with_header("X-Call", "2")),
            )
            .await
            .unwrap();
        let seen = transport.last_seen();
        assert_eq!(seen.headers.get("X-Default").map(String::as_str), Some("1"));
        assert_eq!(seen.headers.get("X-Call").map(String::as_str), Some("2"));
    }

    #[tokio::test]
    async fn test_empty_body_on_2xx_is_null_payload() {
        let transport = FakeTransport::scripted(vec![Ok(RawResponse {
            status: 204,
            body: String::new(),
        })]);
        let client = client(transport, ClientConfig::new("http://api"));

        let value: Option<Value> = client.delete("/api/socials/s1", None).await.unwrap();
        assert!(value.is_none() || value == Some(Value::Null));
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        let result = HttpClient::builder(ClientConfig::new("")).build();
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
