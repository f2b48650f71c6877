//! Company API

use crate::config::RequestConfig;
use crate::http::HttpClient;
use serde_json::Value;
use shared::HttpResult;
use shared::models::{Company, CompanyCreate, CompanyUpdate};
use uuid::Uuid;

impl HttpClient {
    /// List companies visible to the current user
    pub async fn list_companies(&self) -> HttpResult<Vec<Company>> {
        self.get("/api/companies", None).await
    }

    /// Fetch one company
    pub async fn get_company(&self, id: Uuid) -> HttpResult<Company> {
        self.get(&format!("/api/companies/{}", id), None).await
    }

    /// Create a company (not retried: creation is not idempotent)
    pub async fn create_company(&self, payload: &CompanyCreate) -> HttpResult<Company> {
        super::check(payload)?;
        self.post(
            "/api/companies",
            payload,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Update a company
    pub async fn update_company(
        &self,
        id: Uuid,
        payload: &CompanyUpdate,
    ) -> HttpResult<Company> {
        super::check(payload)?;
        self.put(&format!("/api/companies/{}", id), payload, None)
            .await
    }

    /// Delete a company
    pub async fn delete_company(&self, id: Uuid) -> HttpResult<()> {
        let _: Option<Value> = self.delete(&format!("/api/companies/{}", id), None).await?;
        Ok(())
    }
}
