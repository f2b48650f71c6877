//! Employee and Permission API

use crate::http::HttpClient;
use shared::models::{EmployeeResponse, EmployeeUpdate, PermissionsUpdate};
use shared::{HttpResult, PermissionSet};
use uuid::Uuid;

impl HttpClient {
    /// List the employees of a branch
    pub async fn list_employees(&self, branch_id: Uuid) -> HttpResult<Vec<EmployeeResponse>> {
        self.get(&format!("/api/branches/{}/employees", branch_id), None)
            .await
    }

    /// Read an employee's stored permission set
    pub async fn employee_permissions(&self, id: Uuid) -> HttpResult<PermissionSet> {
        self.get(&format!("/api/employees/{}/permissions", id), None)
            .await
    }

    /// Replace an employee's stored permission set.
    ///
    /// The backend stores exactly what is sent; edit-implies-view stays a
    /// query-time rule and is never materialized here.
    pub async fn set_employee_permissions(
        &self,
        id: Uuid,
        permissions: PermissionSet,
    ) -> HttpResult<PermissionSet> {
        let payload = PermissionsUpdate { permissions };
        self.put(&format!("/api/employees/{}/permissions", id), &payload, None)
            .await
    }

    /// Update an employee's role or active flag
    pub async fn update_employee(
        &self,
        id: Uuid,
        payload: &EmployeeUpdate,
    ) -> HttpResult<EmployeeResponse> {
        self.patch(&format!("/api/employees/{}", id), payload, None)
            .await
    }
}
