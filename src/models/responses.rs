use crate::models::domain::RecommendedEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for the find recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindRecommendationsResponse {
    pub recommendations: Vec<RecommendedEvent>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Submit application response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitApplicationResponse {
    pub success: bool,
    pub application_id: Uuid,
}
