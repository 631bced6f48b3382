//! 标记清理服务 - 业务能力层
//!
//! 把编辑器的交互标记变成纯静态的打印标记：
//! 表单控件换成文本、未选中的图标删掉、编辑器占位符和工具条隐藏

use kuchikiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};
use tracing::debug;

use crate::error::AppResult;
use crate::services::dom;

/// 编辑器占位文本，出现在导出里会被整个删除
const EDITOR_PLACEHOLDERS: [&str; 2] = ["Click to add description", "Upload"];

/// 把所有表单控件替换为带当前值的 span
pub fn replace_interactive_controls(document: &NodeRef) -> AppResult<()> {
    let controls = dom::select_all(document, "input, textarea, select")?;
    debug!("替换 {} 个表单控件", controls.len());

    for control in controls {
        let value = control_value(&control);
        let span = NodeRef::new_element(
            dom::html_name("span"),
            None::<(ExpandedName, Attribute)>,
        );
        span.append(NodeRef::new_text(value));

        let node = control.as_node();
        node.insert_after(span);
        node.detach();
    }

    Ok(())
}

/// 读取控件当前值，对应浏览器里的 el.value
fn control_value(control: &NodeDataRef<ElementData>) -> String {
    match &*control.name.local {
        "input" => control
            .attributes
            .borrow()
            .get("value")
            .unwrap_or("")
            .to_string(),
        "textarea" => control.as_node().text_contents(),
        "select" => selected_option_text(control.as_node()),
        _ => String::new(),
    }
}

/// select 的值：优先带 selected 属性的 option，否则取第一个
fn selected_option_text(node: &NodeRef) -> String {
    let Ok(options) = node.select("option") else {
        return String::new();
    };
    let options: Vec<_> = options.collect();

    for option in &options {
        if option.attributes.borrow().contains("selected") {
            return option.as_node().text_contents().trim().to_string();
        }
    }
    options
        .first()
        .map(|o| o.as_node().text_contents().trim().to_string())
        .unwrap_or_default()
}

/// 处理带选中标记的图片
///
/// data-selected 不为 "true" 的整个删除，留下的那张去掉标记属性
pub fn filter_selected_icons(document: &NodeRef) -> AppResult<()> {
    for img in dom::select_all(document, "img[data-selected]")? {
        let selected = matches!(img.attributes.borrow().get("data-selected"), Some("true"));
        if selected {
            img.attributes.borrow_mut().remove("data-selected");
        } else {
            img.as_node().detach();
        }
    }
    Ok(())
}

/// 删除编辑器占位 span
pub fn strip_editor_placeholders(document: &NodeRef) -> AppResult<()> {
    for span in dom::select_all(document, "span")? {
        let text = span.as_node().text_contents();
        if EDITOR_PLACEHOLDERS.contains(&text.trim()) {
            span.as_node().detach();
        }
    }
    Ok(())
}

/// 隐藏标记为编辑器专用的元素
pub fn hide_ui_only(document: &NodeRef) -> AppResult<()> {
    for element in dom::select_all(document, "[data-ui-only]")? {
        let mut attributes = element.attributes.borrow_mut();
        let style = attributes.get("style").unwrap_or("").to_string();
        if style.contains("display:none") || style.contains("display: none") {
            continue;
        }

        let new_style = if style.trim().is_empty() {
            "display: none".to_string()
        } else {
            format!("{}; display: none", style.trim_end().trim_end_matches(';'))
        };
        attributes.insert("style", new_style);
    }
    Ok(())
}
