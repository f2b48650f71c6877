//! Permission resolution
//!
//! Per-employee module permissions with a pure, total resolver:
//! - `admin` and `owner` bypass all checks
//! - `employee` consults the stored [`PermissionSet`]; edit implies view
//! - every other role resolves to false for every module and action
//!
//! Permissions default to absent/false (zero-trust). The edit-implies-view
//! rule is derived at query time, never stored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// User role (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, bypasses permission checks
    Admin,
    /// Business owner, bypasses permission checks
    Owner,
    /// Regular staff, access governed by the stored permission set
    Employee,
    /// Unauthenticated or read-nothing visitor
    Guest,
    /// Developer tooling role
    Dev,
}

impl Role {
    /// Whether this role bypasses permission checks entirely
    #[inline]
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::Owner)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Employee => "employee",
            Role::Guest => "guest",
            Role::Dev => "dev",
        };
        f.write_str(name)
    }
}

/// Functional module over which permissions are granted independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleName {
    Products,
    Categories,
    Schedules,
    Socials,
    Branches,
    Employees,
}

impl ModuleName {
    /// Wire name of the module
    pub fn name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Schedules => "schedules",
            Self::Socials => "socials",
            Self::Branches => "branches",
            Self::Employees => "employees",
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionAction {
    CanView,
    CanEdit,
}

/// Per-module capability record.
///
/// Both fields default to false so a partially-stored record never grants
/// more than it explicitly says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePermissions {
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_edit: bool,
}

impl ModulePermissions {
    pub fn new(can_view: bool, can_edit: bool) -> Self {
        Self { can_view, can_edit }
    }

    /// Full access to the module
    pub fn full() -> Self {
        Self::new(true, true)
    }

    /// View-only access
    pub fn view_only() -> Self {
        Self::new(true, false)
    }
}

/// Per-employee mapping of module to capability record
pub type PermissionSet = HashMap<ModuleName, ModulePermissions>;

/// Resolve an authorization decision.
///
/// Pure and total: no I/O, no error conditions, every input combination
/// yields a boolean. Privileged roles short-circuit to true; `employee`
/// consults the set (absent module means false, edit implies view); every
/// other role is false.
pub fn resolve(
    role: Role,
    permissions: Option<&PermissionSet>,
    module: ModuleName,
    action: PermissionAction,
) -> bool {
    if role.is_privileged() {
        return true;
    }
    if role != Role::Employee {
        return false;
    }
    let Some(entry) = permissions.and_then(|set| set.get(&module)) else {
        return false;
    };
    match action {
        // Edit implies view, derived here rather than stored
        PermissionAction::CanView => entry.can_view || entry.can_edit,
        PermissionAction::CanEdit => entry.can_edit,
    }
}

/// Tri-state UI affordance derived from view + edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Not rendered at all
    Hidden,
    /// Rendered, inputs disabled
    ReadOnly,
    /// Fully interactive
    Editable,
}

/// Combine view and edit into the affordance the UI renders
pub fn access_level(
    role: Role,
    permissions: Option<&PermissionSet>,
    module: ModuleName,
) -> Access {
    if resolve(role, permissions, module, PermissionAction::CanEdit) {
        Access::Editable
    } else if resolve(role, permissions, module, PermissionAction::CanView) {
        Access::ReadOnly
    } else {
        Access::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(ModuleName, bool, bool)]) -> PermissionSet {
        entries
            .iter()
            .map(|&(m, v, e)| (m, ModulePermissions::new(v, e)))
            .collect()
    }

    #[test]
    fn test_privileged_roles_always_allowed() {
        let empty = PermissionSet::new();
        for role in [Role::Admin, Role::Owner] {
            for module in [
                ModuleName::Products,
                ModuleName::Categories,
                ModuleName::Schedules,
                ModuleName::Socials,
            ] {
                for action in [PermissionAction::CanView, PermissionAction::CanEdit] {
                    assert!(resolve(role, Some(&empty), module, action));
                    assert!(resolve(role, None, module, action));
                }
            }
        }
    }

    #[test]
    fn test_non_employee_roles_always_denied() {
        let generous = set(&[(ModuleName::Products, true, true)]);
        for role in [Role::Guest, Role::Dev] {
            for action in [PermissionAction::CanView, PermissionAction::CanEdit] {
                assert!(!resolve(role, Some(&generous), ModuleName::Products, action));
            }
        }
    }

    #[test]
    fn test_edit_implies_view() {
        // canView never stored, canEdit grants it anyway
        let perms = set(&[(ModuleName::Schedules, false, true)]);
        assert!(resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Schedules,
            PermissionAction::CanView
        ));
        assert!(resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Schedules,
            PermissionAction::CanEdit
        ));
    }

    #[test]
    fn test_view_does_not_imply_edit() {
        let perms = set(&[(ModuleName::Schedules, true, false)]);
        assert!(resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Schedules,
            PermissionAction::CanView
        ));
        assert!(!resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Schedules,
            PermissionAction::CanEdit
        ));
    }

    #[test]
    fn test_absent_module_denied() {
        let empty = PermissionSet::new();
        assert!(!resolve(
            Role::Employee,
            Some(&empty),
            ModuleName::Socials,
            PermissionAction::CanView
        ));
        assert!(!resolve(
            Role::Employee,
            Some(&empty),
            ModuleName::Socials,
            PermissionAction::CanEdit
        ));
    }

    #[test]
    fn test_missing_set_denied() {
        assert!(!resolve(
            Role::Employee,
            None,
            ModuleName::Products,
            PermissionAction::CanView
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let perms = set(&[(ModuleName::Products, true, false)]);
        let first = resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Products,
            PermissionAction::CanView,
        );
        let second = resolve(
            Role::Employee,
            Some(&perms),
            ModuleName::Products,
            PermissionAction::CanView,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_access_level_derivation() {
        let perms = set(&[
            (ModuleName::Products, false, true),
            (ModuleName::Schedules, true, false),
        ]);
        assert_eq!(
            access_level(Role::Employee, Some(&perms), ModuleName::Products),
            Access::Editable
        );
        assert_eq!(
            access_level(Role::Employee, Some(&perms), ModuleName::Schedules),
            Access::ReadOnly
        );
        assert_eq!(
            access_level(Role::Employee, Some(&perms), ModuleName::Socials),
            Access::Hidden
        );
        assert_eq!(
            access_level(Role::Admin, None, ModuleName::Socials),
            Access::Editable
        );
        assert_eq!(
            access_level(Role::Guest, Some(&perms), ModuleName::Products),
            Access::Hidden
        );
    }

    #[test]
    fn test_module_permissions_defaults_on_deserialize() {
        // Partially stored record: absent fields must read as false
        let entry: ModulePermissions = serde_json::from_str(r#"{"canEdit":true}"#).unwrap();
        assert!(!entry.can_view);
        assert!(entry.can_edit);
    }

    #[test]
    fn test_permission_set_wire_shape() {
        let json = r#"{"schedules":{"canView":true,"canEdit":false}}"#;
        let set: PermissionSet = serde_json::from_str(json).unwrap();
        assert_eq!(
            set.get(&ModuleName::Schedules),
            Some(&ModulePermissions::view_only())
        );
        assert!(!resolve(
            Role::Employee,
            Some(&set),
            ModuleName::Schedules,
            PermissionAction::CanEdit
        ));
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }
}
