//! Dev Data Browser API
//!
//! Schema-described browsing of raw collections for the dev role. Values
//! arrive with explicit type tags; nothing is coerced client-side.

use crate::config::RequestConfig;
use crate::http::HttpClient;
use shared::HttpResult;
use shared::models::{GenericRecord, RecordSchema};

impl HttpClient {
    /// Fetch the declared schema of a collection
    pub async fn collection_schema(&self, collection: &str) -> HttpResult<RecordSchema> {
        self.get(&format!("/api/dev/collections/{}/schema", collection), None)
            .await
    }

    /// Page through the records of a collection
    pub async fn collection_records(
        &self,
        collection: &str,
        limit: Option<u32>,
    ) -> HttpResult<Vec<GenericRecord>> {
        let overrides = limit
            .map(|n| RequestConfig::new().with_query("limit", n.to_string()));
        self.get(
            &format!("/api/dev/collections/{}/records", collection),
            overrides,
        )
        .await
    }
}
