//! Weekly Schedule API

use crate::http::HttpClient;
use shared::HttpResult;
use shared::models::{ScheduleUpdate, WeeklySchedule};
use uuid::Uuid;

impl HttpClient {
    /// Fetch the weekly schedule of a branch
    pub async fn branch_schedule(&self, branch_id: Uuid) -> HttpResult<WeeklySchedule> {
        self.get(&format!("/api/branches/{}/schedule", branch_id), None)
            .await
    }

    /// Replace the weekly schedule of a branch (idempotent, retried by
    /// the default policy)
    pub async fn set_branch_schedule(
        &self,
        branch_id: Uuid,
        payload: &ScheduleUpdate,
    ) -> HttpResult<WeeklySchedule> {
        self.put(&format!("/api/branches/{}/schedule", branch_id), payload, None)
            .await
    }
}
