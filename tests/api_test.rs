//! HTTP 接口测试
//!
//! 用 tower 的 oneshot 直接驱动路由，不占用端口也不启动浏览器

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use menu_pdf_export::{api, logger, Config, ExportFlow};
use tower::ServiceExt;

fn test_router() -> axum::Router {
    logger::init();
    let config = Config {
        stylesheet_path: "/nonexistent/print.css".to_string(),
        ..Config::default()
    };
    api::router(Arc::new(ExportFlow::new(Arc::new(config))))
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-pdf")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("构造请求失败")
}

#[tokio::test]
async fn missing_html_returns_400() {
    let response = test_router()
        .oneshot(json_request("{}"))
        .await
        .expect("请求失败");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response
        .into_body()
        .collect()
        .await
        .expect("读取响应体失败")
        .to_bytes();
    assert_eq!(&body[..], b"HTML content is required");
}

#[tokio::test]
async fn empty_html_returns_400() {
    let response = test_router()
        .oneshot(json_request(r#"{"html": "  "}"#))
        .await
        .expect("请求失败");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_dimension_returns_400_without_launching_browser() {
    let response = test_router()
        .oneshot(json_request(r#"{"html": "<p>menu</p>", "width": "banana"}"#))
        .await
        .expect("请求失败");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response
        .into_body()
        .collect()
        .await
        .expect("读取响应体失败")
        .to_bytes();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("banana"), "实际响应: {}", text);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .expect("构造请求失败"),
        )
        .await
        .expect("请求失败");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
