//! Shared helpers for basecalc-axum integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use basecalc_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use basecalc_axum::routes::create_router;
use basecalc_chart::ChartSize;

/// Router over a fresh, empty usage log with a small chart canvas.
pub fn test_router() -> Router {
    let config = ServerConfig::with_defaults().with_chart_size(ChartSize::new(160, 120));
    create_router(bootstrap(&config), &CorsConfig::AllowAll)
}

/// Send a request and collect status, content type and body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, bytes.to_vec())
}

/// POST a JSON body and return status plus body text.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let (status, _, bytes) = send(app, Method::POST, uri, body).await;
    (status, String::from_utf8(bytes).unwrap())
}
