//! Authentication Models

use crate::permissions::{PermissionSet, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Register request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
}

/// Opaque signed credential from the identity provider.
///
/// Forwarded to the backend for verification, never inspected locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleCredential {
    pub credential: String,
}

/// Authenticated user information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub permissions: Option<PermissionSet>,
}

/// Login response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token; absent when the backend relies on a session cookie
    #[serde(default)]
    pub token: Option<String>,
    pub user: UserInfo,
}

/// Avatar upload response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}
