use axum::body::{self, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use latency_analytics::http::routes::router;
use latency_analytics::telemetry::store::DatasetStore;
use latency_analytics::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(DatasetStore::builtin()))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/latency")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_running() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        read_json(resp).await,
        json!({"message": "Latency Analytics API", "status": "running"})
    );
}

#[tokio::test]
async fn only_the_two_endpoints_are_served() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn latency_returns_stats_per_region() {
    let resp = app()
        .oneshot(post_json(r#"{"regions": ["apac", "mars"], "threshold_ms": 150}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(body["apac"]["avg_latency"], 163.11);
    assert_eq!(body["apac"]["p95_latency"], 233.6);
    assert_eq!(body["apac"]["avg_uptime"], 98.1308);
    assert_eq!(body["apac"]["breaches"], 8);
    assert_eq!(
        body["mars"],
        json!({"avg_latency": 0, "p95_latency": 0, "avg_uptime": 0, "breaches": 0})
    );
}

#[tokio::test]
async fn response_keys_follow_request_order() {
    let resp = app()
        .oneshot(post_json(r#"{"regions": ["mars", "emea", "apac"], "threshold_ms": 150}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with(
        r#"{"mars":{"avg_latency":0,"p95_latency":0,"avg_uptime":0,"breaches":0},"emea":"#
    ));
    let emea = text.find(r#""emea""#).unwrap();
    let apac = text.find(r#""apac""#).unwrap();
    assert!(emea < apac);
}

#[tokio::test]
async fn empty_region_list_returns_empty_object() {
    let resp = app()
        .oneshot(post_json(r#"{"regions": [], "threshold_ms": -1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({}));
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let resp = app()
        .oneshot(post_json(r#"{"regions": ["apac"]}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    assert!(body["error"]["details"].as_str().unwrap().contains("threshold_ms"));
}

#[tokio::test]
async fn mistyped_fields_are_client_errors() {
    for payload in [
        r#"{"regions": "apac", "threshold_ms": 150}"#,
        r#"{"regions": ["apac"], "threshold_ms": 150.5}"#,
        r#"{"regions": ["apac"], "threshold_ms": "fast"}"#,
        r#"{"regions": [1, 2], "threshold_ms": 150}"#,
    ] {
        let resp = app().oneshot(post_json(payload)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "payload {payload}");
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_REQUEST");
    }
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let resp = app().oneshot(post_json("{not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(resp).await["error"]["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn cors_allows_any_origin_with_credentials() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/latency")
        .header(header::ORIGIN, "https://dashboard.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://dashboard.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-custom"
    );
}

#[tokio::test]
async fn simple_request_carries_cors_headers() {
    let mut req = post_json(r#"{"regions": ["emea"], "threshold_ms": 100}"#);
    req.headers_mut()
        .insert(header::ORIGIN, "http://localhost:5173".parse().unwrap());
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}
