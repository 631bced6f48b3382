//! 真实浏览器渲染测试
//!
//! 需要本机装有 Chromium，默认忽略，手动运行：cargo test -- --ignored

use std::sync::Arc;

use menu_pdf_export::{logger, Config, ExportFlow, ExportRequest};

#[tokio::test]
#[ignore]
async fn export_produces_pdf_bytes() {
    logger::init();
    let config = Config::from_env();
    let flow = ExportFlow::new(Arc::new(config));

    let html = r#"
        <div class="menu">
          <h1>今日菜单</h1>
          <input value="Hot and Sour Soup">
          <span>Click to add description</span>
        </div>
    "#;

    let bytes = flow
        .export(ExportRequest {
            html: html.to_string(),
            width: None,
            height: None,
            font: None,
        })
        .await
        .expect("导出失败");

    // PDF 文件魔数
    assert!(bytes.starts_with(b"%PDF"), "输出不是 PDF");
}

#[tokio::test]
#[ignore]
async fn export_honours_custom_page_size() {
    logger::init();
    let config = Config::from_env();
    let flow = ExportFlow::new(Arc::new(config));

    let bytes = flow
        .export(ExportRequest {
            html: "<p>名片尺寸菜单</p>".to_string(),
            width: Some("100mm".to_string()),
            height: Some("150mm".to_string()),
            font: Some("Noto Sans SC".to_string()),
        })
        .await
        .expect("导出失败");

    assert!(bytes.starts_with(b"%PDF"));
}
