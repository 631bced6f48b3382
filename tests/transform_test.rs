//! HTML 变换的端到端测试（不需要浏览器）

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use menu_pdf_export::services::{transform_document, TransformContext};
use menu_pdf_export::MenuOption;

fn ctx(asset_root: &Path) -> TransformContext {
    TransformContext {
        asset_root: asset_root.to_path_buf(),
        photo_box_px: 200,
        icon_box_px: 96,
    }
}

/// 在资源目录下写一张真实的 PNG
fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 120, 30, 255]));
    let mut buffer = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("生成测试图片失败");
    fs::write(dir.join(name), buffer.into_inner()).expect("写图片失败");
}

#[test]
fn interactive_controls_become_static_text() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let html = r#"
        <div class="menu-item">
          <input value="Soup">
          <textarea>每日例汤</textarea>
          <select><option selected>Large</option><option>Small</option></select>
        </div>
    "#;

    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains("<span>Soup</span>"), "实际输出: {}", output);
    assert!(output.contains("每日例汤"));
    assert!(output.contains("<span>Large</span>"));
    for control in ["<input", "<textarea", "<select"] {
        assert!(!output.contains(control), "输出不应包含 {}", control);
    }
}

#[test]
fn selected_icon_survives_without_marker() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let html = r#"
        <img src="/icons/spicy.svg" data-selected="true">
        <img src="/icons/vegan.svg" data-selected="false">
    "#;

    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains("spicy.svg"));
    assert!(!output.contains("vegan.svg"));
    assert!(!output.contains("data-selected"));
}

#[test]
fn local_raster_image_is_inlined_as_data_uri() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let picture_dir = dir.path().join("picture");
    fs::create_dir(&picture_dir).expect("创建目录失败");
    write_png(&picture_dir, "dish.png", 400, 300);

    let html = r#"<img src="/picture/dish.png?v=2">"#;
    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains("data:image/png;base64,"), "实际输出: {}", output);
    assert!(!output.contains("/picture/dish.png"));
    assert!(!output.contains("data-missing"));
}

#[test]
fn local_svg_icon_is_inlined_with_bounded_square() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let svg_dir = dir.path().join("icons");
    fs::create_dir(&svg_dir).expect("创建目录失败");
    fs::write(
        svg_dir.join("recommend.svg"),
        br#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="8"/></svg>"#,
    )
    .expect("写 SVG 失败");

    let html = r#"<img src="/icons/recommend.svg">"#;
    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains("data:image/svg+xml;base64,"));
    assert!(output.contains(r#"width="96""#));
    assert!(output.contains(r#"height="96""#));
}

#[test]
fn default_icon_set_resolves_under_asset_root() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let svg_dir = dir.path().join("src/asset/svg");
    fs::create_dir_all(&svg_dir).expect("创建目录失败");
    for option in MenuOption::ALL {
        let name = Path::new(option.default_icon_asset())
            .file_name()
            .expect("图标路径缺少文件名");
        fs::write(
            svg_dir.join(name),
            br#"<svg xmlns="http://www.w3.org/2000/svg"/>"#,
        )
        .expect("写 SVG 失败");
    }

    // 编辑器给每个标签渲染一个默认图标，只有 Spicy 被选中
    let html: String = MenuOption::ALL
        .iter()
        .map(|option| {
            format!(
                r#"<img src="{}" data-selected="{}">"#,
                option.default_icon_asset(),
                *option == MenuOption::Spicy
            )
        })
        .collect();

    let output = transform_document(&html, &ctx(dir.path())).expect("变换失败");

    assert_eq!(output.matches("data:image/svg+xml;base64,").count(), 1);
    assert!(!output.contains(".svg"));
    assert!(!output.contains("data-missing"));
}

#[test]
fn missing_asset_is_flagged_not_fatal() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let html = r#"<img src="/picture/nope.png"><p>still here</p>"#;

    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains(r#"data-missing="true""#));
    assert!(!output.contains("data:image"));
    assert!(output.contains("still here"));
}

#[test]
fn remote_and_data_uris_are_left_alone() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let html = r#"
        <img src="https://example.com/remote.png">
        <img src="data:image/png;base64,AAAA">
    "#;

    let output = transform_document(html, &ctx(dir.path())).expect("变换失败");

    assert!(output.contains("https://example.com/remote.png"));
    assert!(output.contains("data:image/png;base64,AAAA"));
    assert!(!output.contains("data-missing"));
}

#[test]
fn transform_is_idempotent() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let picture_dir = dir.path().join("picture");
    fs::create_dir(&picture_dir).expect("创建目录失败");
    write_png(&picture_dir, "dish.png", 64, 64);

    let html = r#"
        <div data-ui-only>toolbar</div>
        <input value="Soup">
        <img src="/picture/dish.png" data-selected="true">
        <img src="/picture/gone.png">
        <span>Click to add description</span>
    "#;

    let context = ctx(dir.path());
    let once = transform_document(html, &context).expect("第一次变换失败");
    let twice = transform_document(&once, &context).expect("第二次变换失败");

    // 已处理过的标记重跑必须是无操作
    assert_eq!(once, twice);
}
