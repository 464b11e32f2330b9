use crate::models::{Event, EventStatus, TalentProfile};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when talking to the platform catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only client for the platform's internal catalog API
///
/// The platform backend remains the system of record for talents, events,
/// skills and faculties. This client covers the queries the recommendation
/// engine and the application workflow need:
/// - Fetching a talent's profile (skills + faculty)
/// - Listing published events
/// - Resolving a single event
pub struct CatalogClient {
    base_url: String,
    service_token: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: String, service_token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            service_token,
            client,
        }
    }

    /// Fetch a talent's profile by user id
    ///
    /// Returns `CatalogError::NotFound` when the talent has not created a
    /// profile yet; callers decide how to degrade.
    pub async fn get_talent_profile(&self, user_id: Uuid) -> Result<TalentProfile, CatalogError> {
        let url = format!(
            "{}/internal/talents/{}/profile",
            self.base_url.trim_end_matches('/'),
            user_id
        );

        tracing::debug!("Fetching talent profile from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Service-Token", &self.service_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(CatalogError::NotFound(format!(
                    "Profile not found for user {}",
                    user_id
                )));
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CatalogError::Unauthorized);
            }
            status if !status.is_success() => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Failed to fetch profile for {}: {} - {}", user_id, status, body);
                return Err(CatalogError::ApiError(format!(
                    "Failed to fetch profile: {}",
                    status
                )));
            }
            _ => {}
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// List all published events from the catalog
    ///
    /// The catalog is asked for published events only; the status is re-checked
    /// client-side so a misbehaving filter can never leak drafts into
    /// recommendations.
    pub async fn list_published_events(&self) -> Result<Vec<Event>, CatalogError> {
        let query = build_query(&[("status", "published"), ("ordering", "-date")]);
        let url = format!(
            "{}/internal/events?{}",
            self.base_url.trim_end_matches('/'),
            query
        );

        tracing::debug!("Listing published events from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Service-Token", &self.service_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to list events: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        let items = extract_list(&json)?;

        let events: Vec<Event> = items
            .iter()
            .filter_map(|item| serde_json::from_value::<Event>(item.clone()).ok())
            .filter(|event| event.status == EventStatus::Published)
            .collect();

        tracing::debug!("Catalog returned {} published events", events.len());

        Ok(events)
    }

    /// Resolve a single event by id
    pub async fn get_event(&self, event_id: Uuid) -> Result<Event, CatalogError> {
        let url = format!(
            "{}/internal/events/{}",
            self.base_url.trim_end_matches('/'),
            event_id
        );

        tracing::debug!("Fetching event from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Service-Token", &self.service_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(CatalogError::NotFound(format!("Event {} not found", event_id)));
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CatalogError::Unauthorized);
            }
            status if !status.is_success() => {
                return Err(CatalogError::ApiError(format!(
                    "Failed to fetch event: {}",
                    status
                )));
            }
            _ => {}
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse event: {}", e)))
    }
}

/// Build a URL query string with percent-encoded values
fn build_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The platform's list endpoints return either a bare JSON array or a
/// paginated `{"results": [...]}` envelope
fn extract_list(json: &Value) -> Result<&Vec<Value>, CatalogError> {
    if let Some(items) = json.as_array() {
        return Ok(items);
    }

    json.get("results")
        .and_then(|r| r.as_array())
        .ok_or_else(|| CatalogError::InvalidResponse("Missing results array".into()))
}
