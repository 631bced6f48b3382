//! 图片内联服务 - 业务能力层
//!
//! 把指向本地资源的 img src 换成内嵌的 data URI，
//! 找不到的资源打上 data-missing 标记降级处理，不让整个导出失败

use kuchikiki::NodeRef;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{assets, image_codec};
use crate::services::dom;
use crate::services::TransformContext;

/// 内联所有本地图片引用
///
/// 远程 URL 和已有的 data URI 原样跳过，因此对自身输出重跑是无操作
pub fn inline_local_images(document: &NodeRef, ctx: &TransformContext) -> AppResult<()> {
    for img in dom::select_all(document, "img")? {
        let src = match img.attributes.borrow().get("src") {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => continue,
        };

        if src.starts_with("data:") || src.starts_with("http") {
            continue;
        }

        let clean = assets::clean_source_path(&src);
        let Some(path) = assets::resolve_under_root(&ctx.asset_root, &clean) else {
            warn!("🖼️ 找不到本地图片资源: {}", src);
            img.attributes
                .borrow_mut()
                .insert("data-missing", "true".to_string());
            continue;
        };

        // 存在性检查已通过，这里读失败属于内部错误
        let bytes = std::fs::read(&path)
            .map_err(|e| AppError::asset_read_failed(path.display().to_string(), e))?;

        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            let data_uri = image_codec::encode_svg(&bytes);
            let mut attributes = img.attributes.borrow_mut();
            attributes.insert("src", data_uri);
            // 不栅格化，用元素属性把图标约束在正方形内
            attributes.insert("width", ctx.icon_box_px.to_string());
            attributes.insert("height", ctx.icon_box_px.to_string());
        } else {
            let data_uri = image_codec::encode_raster(&bytes, ctx.photo_box_px, ctx.photo_box_px)
                .map_err(|e| AppError::asset_codec_failed(path.display().to_string(), e))?;
            img.attributes.borrow_mut().insert("src", data_uri);
        }
        debug!("已内联图片: {}", path.display());
    }

    Ok(())
}
