use crate::core::is_eligible;
use crate::models::{
    ErrorResponse, EventStatus, SubmitApplicationRequest, SubmitApplicationResponse, TalentProfile,
};
use crate::routes::AppState;
use crate::services::{ApplicationError, CatalogError};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Configure application routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/applications/submit", web::post().to(submit_application))
        .route("/applications", web::get().to(list_applications))
        .route("/applications/stats", web::get().to(application_stats));
}

/// Submit application endpoint
///
/// POST /api/v1/applications/submit
///
/// Request body:
/// ```json
/// {
///   "user_id": "uuid",
///   "event_id": "uuid",
///   "message": "string"
/// }
/// ```
///
/// The same eligibility gate used by the recommendation engine runs here:
/// a talent ineligible for a faculty-restricted event is rejected before any
/// record is created, as is a duplicate (talent, event) pair.
async fn submit_application(
    state: web::Data<AppState>,
    req: web::Json<SubmitApplicationRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Resolve the event; a missing reference is a client error
    let event = match state.catalog.get_event(req.event_id).await {
        Ok(event) => event,
        Err(CatalogError::NotFound(_)) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_event".to_string(),
                message: format!("Event {} does not exist", req.event_id),
                status_code: 400,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch event {}: {}", req.event_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch event".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    if event.status != EventStatus::Published {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "event_not_open".to_string(),
            message: "Event is not open for applications".to_string(),
            status_code: 400,
        });
    }

    // A talent without a profile simply has no faculty; the gate decides
    let profile = match state.catalog.get_talent_profile(req.user_id).await {
        Ok(profile) => profile,
        Err(CatalogError::NotFound(_)) => TalentProfile::anonymous(req.user_id),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", req.user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    if !is_eligible(&profile, &event) {
        tracing::info!(
            "Rejected application: user {} not eligible for restricted event {}",
            req.user_id,
            req.event_id
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "ineligible_faculty".to_string(),
            message: "Talent's faculty is not eligible for this event".to_string(),
            status_code: 400,
        });
    }

    match state
        .applications
        .submit(req.user_id, req.event_id, &req.message)
        .await
    {
        Ok(application) => {
            tracing::info!(
                "Application {} created: user {} -> event {}",
                application.id,
                req.user_id,
                req.event_id
            );
            HttpResponse::Created().json(SubmitApplicationResponse {
                success: true,
                application_id: application.id,
            })
        }
        Err(ApplicationError::Duplicate) => HttpResponse::Conflict().json(ErrorResponse {
            error: "duplicate_application".to_string(),
            message: "An application for this event already exists".to_string(),
            status_code: 409,
        }),
        Err(e) => {
            tracing::error!("Failed to store application: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store application".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List a talent's applications
///
/// GET /api/v1/applications?user_id={uuid}
async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match parse_id_param(&query, "user_id") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.applications.list_for_user(user_id).await {
        Ok(applications) => HttpResponse::Ok().json(serde_json::json!({
            "user_id": user_id,
            "count": applications.len(),
            "applications": applications,
        })),
        Err(e) => {
            tracing::error!("Failed to list applications for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list applications".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Per-event application statistics
///
/// GET /api/v1/applications/stats?event_id={uuid}
async fn application_stats(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let event_id = match parse_id_param(&query, "event_id") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.applications.event_stats(event_id).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => {
            tracing::error!("Failed to fetch stats for event {}: {}", event_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn parse_id_param(
    query: &std::collections::HashMap<String, String>,
    name: &str,
) -> Result<Uuid, HttpResponse> {
    let raw = query.get(name).ok_or_else(|| {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("Missing {} parameter", name),
            message: format!("{} query parameter is required", name),
            status_code: 400,
        })
    })?;

    raw.parse::<Uuid>().map_err(|_| {
        HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("Invalid {} parameter", name),
            message: format!("{} must be a UUID", name),
            status_code: 400,
        })
    })
}
