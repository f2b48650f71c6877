//! Employee Model

use crate::permissions::{PermissionSet, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    /// Stored module permissions; only consulted when `role` is employee
    #[serde(default)]
    pub permissions: Option<PermissionSet>,
}

/// Payload for replacing an employee's stored permission set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionsUpdate {
    pub permissions: PermissionSet,
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}
