//! DOM 操作辅助函数
//!
//! kuchikiki 的选择器返回的是惰性迭代器，变换前先收集成 Vec，
//! 避免一边遍历一边改树

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::{LocalName, Namespace, QualName};
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

use crate::error::{AppError, AppResult};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// 构造 HTML 命名空间下的元素名
pub fn html_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(name))
}

/// 选中所有匹配的元素并收集
pub fn select_all(node: &NodeRef, selectors: &str) -> AppResult<Vec<NodeDataRef<ElementData>>> {
    Ok(node
        .select(selectors)
        .map_err(|_| AppError::Other(format!("CSS 选择器解析失败: {}", selectors)))?
        .collect())
}

/// 序列化节点的子节点（相当于 innerHTML）
pub fn serialize_children(node: &NodeRef) -> AppResult<String> {
    let mut buffer = Vec::new();
    serialize(
        &mut buffer,
        node,
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )
    .map_err(|e| AppError::Other(format!("HTML 序列化失败: {}", e)))?;
    String::from_utf8(buffer).map_err(|e| AppError::Other(format!("HTML 编码失败: {}", e)))
}
