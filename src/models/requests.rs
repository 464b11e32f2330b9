use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to compute recommendations for a talent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindRecommendationsRequest {
    #[serde(alias = "userId")]
    pub user_id: Uuid,
    /// Defaults to `matching.default_limit`, capped at `matching.max_limit`
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to submit an application for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[serde(alias = "userId")]
    pub user_id: Uuid,
    #[serde(alias = "eventId")]
    pub event_id: Uuid,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub message: String,
}
