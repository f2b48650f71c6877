//! Branch Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Branch entity (belongs to a company)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    /// Populated by the location endpoint, absent on list responses
    #[serde(default)]
    pub location: Option<BranchLocation>,
}

/// Physical location of a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BranchLocation {
    #[validate(length(min = 1))]
    pub address: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Create branch payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BranchCreate {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub phone: Option<String>,
}

/// Update branch payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BranchUpdate {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
