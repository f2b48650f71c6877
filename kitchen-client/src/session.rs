//! Session state
//!
//! An explicitly owned state container passed by handle (`Arc`) to whoever
//! needs it: the bearer-auth interceptor reads the token, UI code asks for
//! permission decisions. There is no ambient singleton.

use shared::models::UserInfo;
use shared::permissions::{self, Access, ModuleName, PermissionAction, Role};
use std::sync::RwLock;

/// Storage seam for the auth token.
///
/// The in-memory implementation suffices for tests and short-lived tools;
/// a host shell can provide one backed by its persistent key-value store.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store that lives and dies with the process
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, token: &str) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Session store: token plus the signed-in user.
///
/// Permission queries with no signed-in user resolve as guest, which
/// denies everything.
pub struct SessionStore {
    tokens: Box<dyn TokenStore>,
    user: RwLock<Option<UserInfo>>,
}

impl SessionStore {
    /// Create a session store over the given token storage
    pub fn new(tokens: Box<dyn TokenStore>) -> Self {
        Self {
            tokens,
            user: RwLock::new(None),
        }
    }

    /// Create a session store with in-memory token storage
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTokenStore::default()))
    }

    /// The stored auth token, if any
    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    /// Store an auth token
    pub fn set_token(&self, token: &str) {
        self.tokens.save(token);
    }

    /// Record a successful login
    pub fn sign_in(&self, user: UserInfo, token: Option<&str>) {
        if let Some(token) = token {
            self.tokens.save(token);
        }
        *self.user.write().unwrap_or_else(|e| e.into_inner()) = Some(user);
    }

    /// Discard the token and user
    pub fn sign_out(&self) {
        self.tokens.clear();
        *self.user.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<UserInfo> {
        self.user.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The signed-in user's role; guest when nobody is signed in
    pub fn role(&self) -> Role {
        self.user().map(|u| u.role).unwrap_or(Role::Guest)
    }

    /// Can the current user view the module?
    pub fn can_view(&self, module: ModuleName) -> bool {
        self.resolve(module, PermissionAction::CanView)
    }

    /// Can the current user edit the module?
    pub fn can_edit(&self, module: ModuleName) -> bool {
        self.resolve(module, PermissionAction::CanEdit)
    }

    /// Tri-state affordance for rendering the module
    pub fn access(&self, module: ModuleName) -> Access {
        let user = self.user();
        permissions::access_level(
            user.as_ref().map(|u| u.role).unwrap_or(Role::Guest),
            user.as_ref().and_then(|u| u.permissions.as_ref()),
            module,
        )
    }

    fn resolve(&self, module: ModuleName, action: PermissionAction) -> bool {
        let user = self.user();
        permissions::resolve(
            user.as_ref().map(|u| u.role).unwrap_or(Role::Guest),
            user.as_ref().and_then(|u| u.permissions.as_ref()),
            module,
            action,
        )
    }
}
