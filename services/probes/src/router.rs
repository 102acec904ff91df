use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use vigil_core::health::healthz;
use vigil_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::health::readyz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/healthz", get(healthz))
        .route("/healthcheck", get(healthz))
        // Readiness
        .route("/readyz", get(readyz))
        .route("/ready", get(readyz))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
