use axum::extract::State;

use vigil_core::health::HealthStatus;

use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

/// Readiness check: 200 `OK` when the datastore accepts a connection, 503 `NOT_READY` otherwise.
pub async fn readyz(State(state): State<AppState>) -> HealthStatus {
    state.readiness_usecase().status().await
}
