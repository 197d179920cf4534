use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::health::handlers;
use crate::features::health::services::HealthService;

/// Create routes for the health feature
pub fn routes(service: Arc<HealthService>) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::get_health))
        .route("/health/{path_echo}", get(handlers::get_health_with_path))
        .with_state(service)
}
