//! Branch API
//!
//! Branches nest under companies; locations nest under branches. The batch
//! loader fetches branches for many companies as one unordered batch, and a
//! failing company does not abort its siblings.

use crate::config::RequestConfig;
use crate::http::HttpClient;
use futures::future::join_all;
use serde_json::Value;
use shared::HttpResult;
use shared::models::{Branch, BranchCreate, BranchLocation, BranchUpdate};
use uuid::Uuid;

impl HttpClient {
    /// List the branches of a company
    pub async fn list_branches(&self, company_id: Uuid) -> HttpResult<Vec<Branch>> {
        self.get(&format!("/api/companies/{}/branches", company_id), None)
            .await
    }

    /// Load branches for many companies as one unordered batch.
    ///
    /// Per-item failures are logged and returned alongside the successes;
    /// callers decide how to render the partial result.
    pub async fn load_branches_batch(
        &self,
        company_ids: &[Uuid],
    ) -> Vec<(Uuid, HttpResult<Vec<Branch>>)> {
        let fetches = company_ids.iter().map(|&id| async move {
            let result = self.list_branches(id).await;
            if let Err(err) = &result {
                tracing::warn!(company_id = %id, kind = %err.kind, "branch fetch failed in batch");
            }
            (id, result)
        });
        join_all(fetches).await
    }

    /// Create a branch under a company (not retried)
    pub async fn create_branch(
        &self,
        company_id: Uuid,
        payload: &BranchCreate,
    ) -> HttpResult<Branch> {
        super::check(payload)?;
        self.post(
            &format!("/api/companies/{}/branches", company_id),
            payload,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Update a branch
    pub async fn update_branch(&self, id: Uuid, payload: &BranchUpdate) -> HttpResult<Branch> {
        super::check(payload)?;
        self.put(&format!("/api/branches/{}", id), payload, None)
            .await
    }

    /// Delete a branch
    pub async fn delete_branch(&self, id: Uuid) -> HttpResult<()> {
        let _: Option<Value> = self.delete(&format!("/api/branches/{}", id), None).await?;
        Ok(())
    }

    /// Fetch a branch's location; `None` when none has been set yet
    pub async fn branch_location(&self, id: Uuid) -> HttpResult<Option<BranchLocation>> {
        self.get(&format!("/api/branches/{}/location", id), None)
            .await
    }

    /// Set or replace a branch's location
    pub async fn set_branch_location(
        &self,
        id: Uuid,
        location: &BranchLocation,
    ) -> HttpResult<BranchLocation> {
        super::check(location)?;
        self.put(&format!("/api/branches/{}/location", id), location, None)
            .await
    }
}
