use chrono::{SecondsFormat, Utc};

use crate::features::health::dtos::{HealthResponseDto, ServiceInfoDto};

/// Service for liveness reporting
pub struct HealthService {
    ip_address: String,
}

impl HealthService {
    /// `ip_address` is the address the service advertises, taken from config
    /// at startup.
    pub fn new(ip_address: String) -> Self {
        Self { ip_address }
    }

    pub fn health(&self, echo: Option<String>, path_echo: Option<String>) -> HealthResponseDto {
        HealthResponseDto {
            status: 200,
            status_message: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ip_address: self.ip_address.clone(),
            echo,
            path_echo,
        }
    }

    pub fn service_info(&self) -> ServiceInfoDto {
        ServiceInfoDto {
            message: "Welcome to the University Bookstore API. See /swagger-ui for the interactive docs.".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_echoes_query_and_path() {
        let service = HealthService::new("127.0.0.1:8000".to_string());
        let health = service.health(Some("hi".to_string()), Some("ping".to_string()));

        assert_eq!(health.status, 200);
        assert_eq!(health.status_message, "OK");
        assert_eq!(health.ip_address, "127.0.0.1:8000");
        assert_eq!(health.echo.as_deref(), Some("hi"));
        assert_eq!(health.path_echo.as_deref(), Some("ping"));
        assert!(health.timestamp.ends_with('Z'));
    }

    #[test]
    fn service_info_reports_crate_version() {
        let service = HealthService::new("127.0.0.1:8000".to_string());
        let info = service.service_info();

        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.message.contains("Bookstore"));
    }
}
