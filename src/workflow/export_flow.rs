//! 导出流程 - 流程层
//!
//! 定义"一次导出请求"的完整处理流程：
//! 校验 → DOM 变换 → 文档外壳 → 无头浏览器渲染

use std::sync::Arc;

use chromiumoxide::Browser;
use tracing::{info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult, RenderError, RequestError};
use crate::infrastructure::PdfRenderer;
use crate::models::PageSize;
use crate::services::{self, document_shell, TransformContext};

/// 一次导出请求的参数
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// 编辑器序列化出的 HTML
    pub html: String,
    /// 页面宽度（如 "210mm"），缺省用配置默认值
    pub width: Option<String>,
    /// 页面高度
    pub height: Option<String>,
    /// 网络字体名称
    pub font: Option<String>,
}

/// 导出流程
///
/// 职责：
/// - 编排变换步骤的执行顺序
/// - 管理浏览器实例的获取与释放（每个请求独占一个，结束必定释放）
/// - 样式表在启动时读入，不使用进程级缓存
pub struct ExportFlow {
    config: Arc<Config>,
    transform_ctx: TransformContext,
    stylesheet: String,
}

impl ExportFlow {
    /// 创建导出流程，读入打印样式表
    pub fn new(config: Arc<Config>) -> Self {
        let stylesheet = match std::fs::read_to_string(&config.stylesheet_path) {
            Ok(css) => css,
            Err(_) => {
                warn!("⚠️ 找不到打印样式表: {}, 使用空样式", config.stylesheet_path);
                String::new()
            }
        };

        Self {
            transform_ctx: TransformContext::from_config(&config),
            stylesheet,
            config,
        }
    }

    /// 执行一次导出，返回 PDF 字节
    ///
    /// 缺少 HTML 或尺寸非法时直接拒绝，不会启动浏览器
    pub async fn export(&self, request: ExportRequest) -> AppResult<Vec<u8>> {
        if request.html.trim().is_empty() {
            return Err(AppError::Request(RequestError::MissingHtml));
        }

        let page_size = PageSize::parse(
            request
                .width
                .as_deref()
                .unwrap_or(&self.config.default_page_width),
            request
                .height
                .as_deref()
                .unwrap_or(&self.config.default_page_height),
        )?;

        info!(
            "📄 收到导出请求: {} 字节, 页面 {:.2}x{:.2} 英寸, 字体: {:?}",
            request.html.len(),
            page_size.width_in,
            page_size.height_in,
            request.font
        );

        // DOM 变换和图片重编码是 CPU/磁盘密集型操作，放到阻塞线程池
        let ctx = self.transform_ctx.clone();
        let html = request.html;
        let body = tokio::task::spawn_blocking(move || services::transform_document(&html, &ctx))
            .await
            .map_err(|e| AppError::Other(format!("变换任务中断: {}", e)))??;

        let shell = document_shell::wrap(&body, &self.stylesheet, request.font.as_deref());

        self.render(shell, &page_size).await
    }

    /// 启动浏览器渲染，无论成败都释放实例
    async fn render(&self, html: String, page_size: &PageSize) -> AppResult<Vec<u8>> {
        let mut browser = browser::launch_headless_browser(&self.config).await?;

        let result = render_on(&browser, &html, page_size).await;

        if let Err(e) = browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        // 等子进程真正退出，避免高负载下堆积僵尸进程
        if let Err(e) = browser.wait().await {
            warn!("等待浏览器退出失败: {}", e);
        }

        result
    }
}

async fn render_on(browser: &Browser, html: &str, page_size: &PageSize) -> AppResult<Vec<u8>> {
    let page = browser.new_page("about:blank").await.map_err(|e| {
        AppError::Render(RenderError::PageCreationFailed {
            source: Box::new(e),
        })
    })?;

    PdfRenderer::new(page).render(html, page_size).await
}
