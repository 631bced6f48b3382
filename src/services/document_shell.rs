//! 文档外壳 - 业务能力层
//!
//! 把变换后的 body 内容包进最小的打印文档：
//! 内联样式表，按需加上网络字体链接

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// encodeURIComponent 的保留字符集
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 包装成完整打印文档
pub fn wrap(body_html: &str, stylesheet: &str, font: Option<&str>) -> String {
    let font_link = font
        .map(|family| {
            format!(
                r#"<link href="https://fonts.googleapis.com/css2?family={}&display=swap" rel="stylesheet" />"#,
                utf8_percent_encode(family, QUERY_COMPONENT)
            )
        })
        .unwrap_or_default();

    format!(
        "<html>\n  <head>\n    {}\n    <style>{}</style>\n  </head>\n  <body>{}</body>\n</html>",
        font_link, stylesheet, body_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_body_with_stylesheet() {
        let html = wrap("<p>菜单</p>", "body { margin: 0 }", None);
        assert!(html.contains("<style>body { margin: 0 }</style>"));
        assert!(html.contains("<body><p>菜单</p></body>"));
        assert!(!html.contains("fonts.googleapis.com"));
    }

    #[test]
    fn font_family_is_encoded_into_link() {
        let html = wrap("<p></p>", "", Some("Noto Sans SC"));
        assert!(html.contains("https://fonts.googleapis.com/css2?family=Noto%20Sans%20SC&display=swap"));
    }
}
