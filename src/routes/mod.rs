// Route exports
pub mod applications;
pub mod recommendations;

use crate::core::Recommender;
use crate::services::{ApplicationStore, CatalogClient};
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub applications: Arc<ApplicationStore>,
    pub recommender: Recommender,
    pub default_limit: u16,
    pub max_limit: u16,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure)
            .configure(applications::configure),
    );
}
