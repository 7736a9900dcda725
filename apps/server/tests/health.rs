use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use paysplit_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::from_env().unwrap();
    let app = app_router(build_state(), &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn openapi_lists_paycheck_routes() {
    let config = Config::from_env().unwrap();
    let app = app_router(build_state(), &config);

    let response = app
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"].get("/api/v1/paycheck/split").is_some());
    assert!(doc["paths"].get("/api/v1/paycheck/default-buckets").is_some());
}
