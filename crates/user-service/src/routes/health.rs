//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub svc: &'static str,
}

/// Reported by every health probe while the listener is up.
pub const HEALTH: HealthStatus = HealthStatus {
    status: "ok",
    svc: "user",
};

/// GET /health — returns service health status.
#[tracing::instrument]
pub async fn check() -> Json<HealthStatus> {
    Json(HEALTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_returns_constant() {
        let Json(body) = check().await;
        assert_eq!(body, HEALTH);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&HEALTH).unwrap();
        assert_eq!(json, r#"{"status":"ok","svc":"user"}"#);
    }
}
