//! PDF 导出接口
//!
//! POST /generate-pdf：接收编辑器 HTML，返回 inline 的 PDF 文件

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{error, warn};

use crate::error::{AppError, RequestError};
use crate::workflow::{ExportFlow, ExportRequest};

/// 请求体，字段与前端保持一致
#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub font: Option<String>,
}

/// POST /generate-pdf
pub async fn generate_pdf(
    State(flow): State<Arc<ExportFlow>>,
    Json(request): Json<PdfRequest>,
) -> Response {
    let export = ExportRequest {
        html: request.html.unwrap_or_default(),
        width: request.width,
        height: request.height,
        font: request.font,
    };

    match flow.export(export).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (
                    header::CONTENT_DISPOSITION,
                    r#"inline; filename="document.pdf""#,
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Request(RequestError::MissingHtml) => {
                warn!("请求缺少 HTML 内容");
                (StatusCode::BAD_REQUEST, "HTML content is required").into_response()
            }
            AppError::Request(RequestError::InvalidDimension { value }) => {
                warn!("页面尺寸非法: {}", value);
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid page dimension: {}", value),
                )
                    .into_response()
            }
            _ => {
                // 内部细节只进日志，不回给客户端
                error!("❌ PDF 生成失败: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate PDF").into_response()
            }
        }
    }
}
