//! Company Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Company entity (top of the business hierarchy)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Hosted logo URL (uploaded through the image endpoint)
    pub logo_url: Option<String>,
    /// Owner user ID
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyCreate {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

/// Update company payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyUpdate {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub logo_url: Option<String>,
}
