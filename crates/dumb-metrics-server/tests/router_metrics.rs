//! Router tests for the `/metrics` responder.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dumb_metrics_core::exposition::{CONTENT_TYPE, PAYLOAD};
use dumb_metrics_server::router::build_router;

async fn body_bytes(resp: Response) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn send(req: Request<Body>) -> Response {
    build_router().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn get_metrics_returns_payload() {
    let resp = send(Request::get("/metrics").body(Body::empty()).unwrap()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        CONTENT_TYPE
    );
    assert_eq!(body_bytes(resp).await, PAYLOAD.as_bytes());
}

#[tokio::test]
async fn method_is_ignored() {
    for method in [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ] {
        let req = Request::builder()
            .method(method.clone())
            .uri("/metrics")
            .body(Body::from("ignored body"))
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK, "method {method}");
        assert_eq!(body_bytes(resp).await, PAYLOAD.as_bytes(), "method {method}");
    }
}

#[tokio::test]
async fn query_and_headers_are_ignored() {
    let req = Request::get("/metrics?tube=rql&format=json")
        .header(header::ACCEPT, "application/json")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    let resp = send(req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, PAYLOAD.as_bytes());
}

#[tokio::test]
async fn other_paths_are_not_found() {
    for path in ["/", "/unknown", "/metrics/", "/metrics/extra", "/Metrics"] {
        let resp = send(Request::get(path).body(Body::empty()).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        assert_ne!(body_bytes(resp).await, PAYLOAD.as_bytes(), "path {path}");
    }
}

#[tokio::test]
async fn concurrent_requests_get_identical_bodies() {
    let app = build_router();
    let mut handles = Vec::new();
    for _ in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let resp = app
                .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
                .await
                .unwrap();
            body_bytes(resp).await
        }));
    }

    for h in handles {
        assert_eq!(h.await.unwrap(), PAYLOAD.as_bytes());
    }
}
