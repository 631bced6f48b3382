//! 图片重编码 - 基础设施层
//!
//! 栅格图等比缩放到限定方框内再编码为 PNG，SVG 原样内嵌，
//! 输出统一是 data URI，渲染引擎不再访问磁盘

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::FilterType;
use image::ImageFormat;

/// 栅格图片缩放并编码为 PNG data URI
///
/// # 参数
/// - `bytes`: 原始图片字节
/// - `max_width` / `max_height`: 目标方框（等比缩放）
pub fn encode_raster(
    bytes: &[u8],
    max_width: u32,
    max_height: u32,
) -> Result<String, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let resized = decoded.resize(max_width, max_height, FilterType::Triangle);

    let mut buffer = Cursor::new(Vec::new());
    resized.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(buffer.get_ref())
    ))
}

/// SVG 编码为 data URI（不栅格化，尺寸由元素属性约束）
pub fn encode_svg(bytes: &[u8]) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut buffer = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buffer, ImageFormat::Png)
            .expect("生成测试图片失败");
        buffer.into_inner()
    }

    #[test]
    fn raster_fits_bounding_box() {
        let bytes = sample_png(400, 100);
        let data_uri = encode_raster(&bytes, 200, 200).expect("编码失败");
        assert!(data_uri.starts_with("data:image/png;base64,"));

        // 解回来检查边界：等比缩放后不超过方框
        let payload = data_uri.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = STANDARD.decode(payload).expect("base64 解码失败");
        let img = image::load_from_memory(&decoded).expect("PNG 解码失败");
        assert!(img.width() <= 200 && img.height() <= 200);
        // 长边贴到方框边上
        assert_eq!(img.width(), 200);
    }

    #[test]
    fn corrupt_raster_is_an_error() {
        assert!(encode_raster(b"not an image", 200, 200).is_err());
    }

    #[test]
    fn svg_passthrough() {
        let svg = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        let data_uri = encode_svg(svg);
        assert!(data_uri.starts_with("data:image/svg+xml;base64,"));
        let payload = data_uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), svg);
    }
}
