//! Social Media Link Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Supported social platforms (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Tiktok,
    Youtube,
    Whatsapp,
    Website,
}

/// Social media link attached to a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: Uuid,
    pub branch_id: Uuid,
    pub platform: SocialPlatform,
    pub url: String,
}

/// Create social link payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialLinkCreate {
    pub platform: SocialPlatform,
    #[validate(url)]
    pub url: String,
}

/// Update social link payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SocialLinkUpdate {
    #[validate(url)]
    pub url: String,
}
