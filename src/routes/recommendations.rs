use crate::models::{
    ErrorResponse, FindRecommendationsRequest, FindRecommendationsResponse, HealthResponse,
    TalentProfile,
};
use crate::routes::AppState;
use crate::services::CatalogError;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/find", web::post().to(find_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.applications.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find recommendations endpoint
///
/// POST /api/v1/recommendations/find
///
/// Request body:
/// ```json
/// {
///   "user_id": "uuid",
///   "limit": 20
/// }
/// ```
///
/// Failure policy: a talent without a profile degrades to open events only;
/// any collaborator fault degrades to an empty list. The endpoint never
/// answers 500 for a matching failure.
async fn find_recommendations(
    state: web::Data<AppState>,
    req: web::Json<FindRecommendationsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_recommendations request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = req.user_id;
    let limit = req
        .limit
        .unwrap_or(state.default_limit)
        .min(state.max_limit) as usize;

    tracing::info!("Finding recommendations for user: {}, limit: {}", user_id, limit);

    // Fetch published events from the catalog; fail closed to an empty list
    let events = match state.catalog.list_published_events().await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Failed to list published events for {}: {}", user_id, e);
            return HttpResponse::Ok().json(FindRecommendationsResponse {
                recommendations: vec![],
                total_candidates: 0,
            });
        }
    };

    tracing::debug!("Found {} candidate events for {}", events.len(), user_id);

    // Fetch the talent profile; a missing profile is not an error
    let profile = match state.catalog.get_talent_profile(user_id).await {
        Ok(profile) => profile,
        Err(CatalogError::NotFound(_)) => {
            tracing::info!("No profile for user {}, degrading to open events", user_id);
            TalentProfile::anonymous(user_id)
        }
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            return HttpResponse::Ok().json(FindRecommendationsResponse {
                recommendations: vec![],
                total_candidates: 0,
            });
        }
    };

    // Run the recommendation engine
    let mut result = state.recommender.recommend(&profile, events);
    result.recommendations.truncate(limit);

    tracing::info!(
        "Returning {} recommendations for user {} (from {} candidates)",
        result.recommendations.len(),
        user_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(FindRecommendationsResponse {
        recommendations: result.recommendations,
        total_candidates: result.total_candidates,
    })
}
