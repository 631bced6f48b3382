//! 业务能力层：HTML 变换的各个步骤
//!
//! 每个子模块只提供一种能力，完整的执行顺序由 `transform_document` 编排

pub mod document_shell;
pub mod dom;
pub mod inline_images;
pub mod sanitize;

use std::path::PathBuf;

use kuchikiki::traits::TendrilSink;
use tracing::debug;

use crate::config::Config;
use crate::error::AppResult;

/// 变换上下文：DOM 变换需要的全部配置，显式传入而不是模块级单例
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// 本地图片资源根目录
    pub asset_root: PathBuf,
    /// 菜品照片缩放方框（像素）
    pub photo_box_px: u32,
    /// 矢量图标方框（像素）
    pub icon_box_px: u32,
}

impl TransformContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            asset_root: PathBuf::from(&config.asset_root),
            photo_box_px: config.photo_box_px,
            icon_box_px: config.icon_box_px,
        }
    }
}

/// 把编辑器标记变换为静态打印标记，返回 body 的内部 HTML
///
/// 步骤严格有序：
/// 1. 表单控件换成带值的 span
/// 2. 删掉未选中的图标、去掉选中标记
/// 3. 内联本地图片为 data URI
/// 4. 删除编辑器占位 span
/// 5. 隐藏编辑器专用元素
///
/// 对自身的输出重跑是无操作（幂等）
pub fn transform_document(html: &str, ctx: &TransformContext) -> AppResult<String> {
    debug!("开始 HTML 变换: {} 字节", html.len());
    let document = kuchikiki::parse_html().one(html);

    sanitize::replace_interactive_controls(&document)?;
    sanitize::filter_selected_icons(&document)?;
    inline_images::inline_local_images(&document, ctx)?;
    sanitize::strip_editor_placeholders(&document)?;
    sanitize::hide_ui_only(&document)?;

    let body = document
        .select_first("body")
        .map_err(|_| crate::error::AppError::Other("解析后的文档缺少 body".to_string()))?;
    dom::serialize_children(body.as_node())
}
