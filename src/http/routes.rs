use crate::http::handlers::{latency, ops};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::root))
        .route("/api/latency", post(latency::analyze_latency))
        .with_state(state)
        // Any origin, method and header, with credentials; origin and headers are mirrored.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
