use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::health::dtos::{HealthResponseDto, ServiceInfoDto};
use crate::features::health::services::HealthService;

/// Query params for the health endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct HealthQuery {
    /// Optional echo string returned verbatim
    pub echo: Option<String>,
}

/// Welcome message and service version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = ServiceInfoDto),
    ),
    tag = "health"
)]
pub async fn service_info(State(service): State<Arc<HealthService>>) -> Json<ServiceInfoDto> {
    Json(service.service_info())
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    params(HealthQuery),
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto),
    ),
    tag = "health"
)]
pub async fn get_health(
    State(service): State<Arc<HealthService>>,
    Query(query): Query<HealthQuery>,
) -> Json<HealthResponseDto> {
    Json(service.health(query.echo, None))
}

/// Liveness probe with a required path echo
#[utoipa::path(
    get,
    path = "/health/{path_echo}",
    params(
        ("path_echo" = String, Path, description = "Echo string in the URL path"),
        HealthQuery
    ),
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto),
    ),
    tag = "health"
)]
pub async fn get_health_with_path(
    State(service): State<Arc<HealthService>>,
    Path(path_echo): Path<String>,
    Query(query): Query<HealthQuery>,
) -> Json<HealthResponseDto> {
    Json(service.health(query.echo, Some(path_echo)))
}
