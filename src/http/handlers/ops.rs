use axum::response::IntoResponse;
use axum::Json;

pub async fn root() -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "message": "Latency Analytics API",
            "status": "running"
        })),
    )
        .into_response()
}
