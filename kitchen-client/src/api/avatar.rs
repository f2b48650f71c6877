//! User Avatar API

use crate::config::RequestConfig;
use crate::http::{HttpClient, MultipartFile};
use serde_json::Value;
use shared::HttpResult;
use shared::models::AvatarResponse;

impl HttpClient {
    /// Upload the current user's avatar image (not retried)
    pub async fn upload_avatar(
        &self,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> HttpResult<AvatarResponse> {
        let file = MultipartFile {
            field: "avatar".to_string(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        };
        self.upload(
            "/api/users/avatar",
            file,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Remove the current user's avatar
    pub async fn delete_avatar(&self) -> HttpResult<()> {
        let _: Option<Value> = self.delete("/api/users/avatar", None).await?;
        Ok(())
    }
}
