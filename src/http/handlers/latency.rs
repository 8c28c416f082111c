use crate::domain::analytics::AnalyticsRequest;
use crate::http::extract::ValidatedJson;
use crate::telemetry::aggregator::analyze;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn analyze_latency(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AnalyticsRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        regions = req.regions.len(),
        threshold_ms = req.threshold_ms,
        "analyzing latency"
    );
    let results = analyze(&state.store, &req.regions, req.threshold_ms);
    (axum::http::StatusCode::OK, Json(results)).into_response()
}
