use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    /// Numeric status code (200 for OK)
    pub status: u16,
    pub status_message: String,
    /// ISO 8601 timestamp (UTC)
    pub timestamp: String,
    /// Address the service advertises
    pub ip_address: String,
    /// Echo of the `echo` query param, if supplied
    pub echo: Option<String>,
    /// Echo of the `/health/{path_echo}` path segment, if supplied
    pub path_echo: Option<String>,
}

/// Welcome payload served at the root path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoDto {
    pub message: String,
    pub version: String,
}
