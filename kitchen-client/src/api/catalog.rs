//! Category and Product API

use crate::config::RequestConfig;
use crate::http::HttpClient;
use serde_json::Value;
use shared::HttpResult;
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, Product, ProductCreate, ProductUpdate,
};
use uuid::Uuid;

impl HttpClient {
    // ========== Categories ==========

    /// List the categories of a branch
    pub async fn list_categories(&self, branch_id: Uuid) -> HttpResult<Vec<Category>> {
        self.get(&format!("/api/branches/{}/categories", branch_id), None)
            .await
    }

    /// Create a category (not retried)
    pub async fn create_category(
        &self,
        branch_id: Uuid,
        payload: &CategoryCreate,
    ) -> HttpResult<Category> {
        super::check(payload)?;
        self.post(
            &format!("/api/branches/{}/categories", branch_id),
            payload,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Update a category
    pub async fn update_category(
        &self,
        id: Uuid,
        payload: &CategoryUpdate,
    ) -> HttpResult<Category> {
        super::check(payload)?;
        self.put(&format!("/api/categories/{}", id), payload, None)
            .await
    }

    /// Delete a category
    pub async fn delete_category(&self, id: Uuid) -> HttpResult<()> {
        let _: Option<Value> = self.delete(&format!("/api/categories/{}", id), None).await?;
        Ok(())
    }

    // ========== Products ==========

    /// List the products of a category
    pub async fn list_products(&self, category_id: Uuid) -> HttpResult<Vec<Product>> {
        self.get(&format!("/api/categories/{}/products", category_id), None)
            .await
    }

    /// Create a product (not retried)
    pub async fn create_product(
        &self,
        category_id: Uuid,
        payload: &ProductCreate,
    ) -> HttpResult<Product> {
        super::check(payload)?;
        self.post(
            &format!("/api/categories/{}/products", category_id),
            payload,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Update a product
    pub async fn update_product(&self, id: Uuid, payload: &ProductUpdate) -> HttpResult<Product> {
        super::check(payload)?;
        self.put(&format!("/api/products/{}", id), payload, None)
            .await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: Uuid) -> HttpResult<()> {
        let _: Option<Value> = self.delete(&format!("/api/products/{}", id), None).await?;
        Ok(())
    }
}
