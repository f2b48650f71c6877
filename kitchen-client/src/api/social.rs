//! Social Media Link API

use crate::config::RequestConfig;
use crate::http::HttpClient;
use serde_json::Value;
use shared::HttpResult;
use shared::models::{SocialLink, SocialLinkCreate, SocialLinkUpdate};
use uuid::Uuid;

impl HttpClient {
    /// List the social links of a branch
    pub async fn list_social_links(&self, branch_id: Uuid) -> HttpResult<Vec<SocialLink>> {
        self.get(&format!("/api/branches/{}/socials", branch_id), None)
            .await
    }

    /// Attach a social link to a branch (not retried)
    pub async fn add_social_link(
        &self,
        branch_id: Uuid,
        payload: &SocialLinkCreate,
    ) -> HttpResult<SocialLink> {
        super::check(payload)?;
        self.post(
            &format!("/api/branches/{}/socials", branch_id),
            payload,
            Some(RequestConfig::new().no_retry()),
        )
        .await
    }

    /// Update a social link's URL
    pub async fn update_social_link(
        &self,
        id: Uuid,
        payload: &SocialLinkUpdate,
    ) -> HttpResult<SocialLink> {
        super::check(payload)?;
        self.put(&format!("/api/socials/{}", id), payload, None).await
    }

    /// Remove a social link
    pub async fn delete_social_link(&self, id: Uuid) -> HttpResult<()> {
        let _: Option<Value> = self.delete(&format!("/api/socials/{}", id), None).await?;
        Ok(())
    }
}
