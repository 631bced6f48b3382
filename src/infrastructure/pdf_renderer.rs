//! PDF 渲染器 - 基础设施层
//!
//! 持有唯一的 Page 资源，只暴露"渲染 PDF"的能力

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, RenderError};
use crate::models::PageSize;

/// 页面就绪等待脚本
///
/// 阻塞到三个条件全部满足：load 事件已触发、所有图片加载完成
/// （成功或失败都算完成）、字体资源就绪
const READY_SCRIPT: &str = r#"
(async () => {
  if (document.readyState !== 'complete') {
    await new Promise((resolve) => window.addEventListener('load', resolve, { once: true }));
  }
  const images = Array.from(document.images);
  await Promise.all(
    images.map((img) => {
      if (img.complete) return Promise.resolve();
      return new Promise((resolve) => (img.onload = img.onerror = resolve));
    }),
  );
  await document.fonts.ready;
  return true;
})()
"#;

/// PDF 渲染器
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 设置文档内容、等待渲染资源就绪、打印 PDF
/// - 不认识 MenuItem，也不做 DOM 变换
pub struct PdfRenderer {
    page: Page,
}

impl PdfRenderer {
    /// 创建新的渲染器
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 渲染 HTML 为 PDF 字节
    ///
    /// # 参数
    /// - `html`: 完整文档（样式与图片均已内联）
    /// - `page_size`: 物理页面尺寸
    pub async fn render(&self, html: &str, page_size: &PageSize) -> AppResult<Vec<u8>> {
        debug!("设置页面内容: {} 字节", html.len());
        self.page.set_content(html).await.map_err(|e| {
            AppError::Render(RenderError::SetContentFailed {
                source: Box::new(e),
            })
        })?;

        // 等图片和字体都就绪再打印，否则 PDF 里会出现空白占位
        self.page.evaluate(READY_SCRIPT).await.map_err(|e| {
            AppError::Render(RenderError::ScriptExecutionFailed {
                source: Box::new(e),
            })
        })?;
        debug!("图片与字体已就绪");

        let bytes = self.page.pdf(print_params(page_size)).await.map_err(|e| {
            AppError::Render(RenderError::PdfFailed {
                source: Box::new(e),
            })
        })?;

        info!("✅ PDF 打印完成: {} 字节", bytes.len());
        Ok(bytes)
    }
}

/// 构造 printToPDF 参数：背景图形开启、比例 1:1、纸张尺寸取请求值
pub fn print_params(page_size: &PageSize) -> PrintToPdfParams {
    PrintToPdfParams {
        print_background: Some(true),
        scale: Some(1.0),
        paper_width: Some(page_size.width_in),
        paper_height: Some(page_size.height_in),
        prefer_css_page_size: Some(false),
        ..Default::default()
    }
}
