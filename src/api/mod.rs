//! HTTP 接口层

pub mod pdf;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::workflow::ExportFlow;

/// 前端会把整本菜单的图片以 base64 塞进请求体，限制放宽到 50MB
const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// 构建路由
pub fn router(flow: Arc<ExportFlow>) -> Router {
    Router::new()
        .route("/generate-pdf", post(pdf::generate_pdf))
        .with_state(flow)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
}
