//! Authentication API

use crate::config::RequestConfig;
use crate::http::HttpClient;
use serde_json::Value;
use shared::models::{GoogleCredential, LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use shared::{HttpErrorKind, HttpResult};

impl HttpClient {
    /// Login with email and password.
    ///
    /// On success the session store receives the user and, when the backend
    /// issued one, the bearer token.
    pub async fn login(&self, request: &LoginRequest) -> HttpResult<UserInfo> {
        super::check(request)?;
        let response: LoginResponse = self
            .post(
                "/api/auth/login",
                request,
                Some(RequestConfig::new().no_retry()),
            )
            .await?;
        self.session()
            .sign_in(response.user.clone(), response.token.as_deref());
        Ok(response.user)
    }

    /// Register a new account and sign in
    pub async fn register(&self, request: &RegisterRequest) -> HttpResult<UserInfo> {
        super::check(request)?;
        let response: LoginResponse = self
            .post(
                "/api/auth/register",
                request,
                Some(RequestConfig::new().no_retry()),
            )
            .await?;
        self.session()
            .sign_in(response.user.clone(), response.token.as_deref());
        Ok(response.user)
    }

    /// Sign in with an identity-provider credential.
    ///
    /// The credential is forwarded opaque; the backend verifies it.
    pub async fn google_login(&self, credential: &GoogleCredential) -> HttpResult<UserInfo> {
        let response: LoginResponse = self
            .post(
                "/api/auth/google",
                credential,
                Some(RequestConfig::new().no_retry()),
            )
            .await?;
        self.session()
            .sign_in(response.user.clone(), response.token.as_deref());
        Ok(response.user)
    }

    /// Resume a session from the stored token or the session cookie.
    ///
    /// Returns `Ok(None)` when no session exists; that 401 is expected and
    /// not an error worth surfacing.
    pub async fn auto_login(&self) -> HttpResult<Option<UserInfo>> {
        match self.get::<UserInfo>("/api/auth/me", None).await {
            Ok(user) => {
                self.session().sign_in(user.clone(), None);
                Ok(Some(user))
            }
            Err(err) if err.kind == HttpErrorKind::Authentication => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Logout.
    ///
    /// The local session is discarded even when the backend call fails;
    /// a stale server session is the lesser problem.
    pub async fn logout(&self) -> HttpResult<()> {
        let result = self
            .post_empty::<Option<Value>>("/api/auth/logout", None)
            .await;
        self.session().sign_out();
        result.map(|_| ())
    }
}
