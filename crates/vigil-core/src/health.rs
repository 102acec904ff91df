use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Outcome reported by a probe endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    Ok,
    NotReady,
}

impl HealthStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Wire body of every probe response: `{"status":"OK"}` or `{"status":"NOT_READY"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: HealthStatus,
}

impl IntoResponse for HealthStatus {
    fn into_response(self) -> Response {
        (self.status_code(), Json(StatusBody { status: self })).into_response()
    }
}

/// Handler for `GET /healthz`: liveness check, always OK.
pub async fn healthz() -> HealthStatus {
    HealthStatus::Ok
}
