//! 本地资源路径解析 - 基础设施层
//!
//! 把编辑器标记里的 src 路径安全地映射到资源根目录下的文件

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// 清理 src 路径：去掉查询串、百分号解码、去掉开头的斜杠
pub fn clean_source_path(src: &str) -> String {
    let without_query = src.split('?').next().unwrap_or(src);
    let decoded = percent_decode_str(without_query)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| without_query.to_string());
    decoded.trim_start_matches('/').to_string()
}

/// 在资源根目录下解析相对路径
///
/// 拒绝带 `..` 的路径，文件不存在时返回 None（调用方降级处理）
pub fn resolve_under_root(root: &Path, clean: &str) -> Option<PathBuf> {
    let relative = Path::new(clean);
    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            // 禁止跳出资源根目录
            _ => return None,
        }
    }

    let path = root.join(relative);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn clean_strips_query_and_decodes() {
        assert_eq!(clean_source_path("/picture/dish.png?v=3"), "picture/dish.png");
        assert_eq!(
            clean_source_path("/picture/spring%20rolls.png"),
            "picture/spring rolls.png"
        );
        assert_eq!(clean_source_path("picture/dish.png"), "picture/dish.png");
    }

    #[test]
    fn resolve_rejects_traversal() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        fs::write(dir.path().join("secret.txt"), b"x").expect("写文件失败");

        assert!(resolve_under_root(dir.path(), "../secret.txt").is_none());
        assert!(resolve_under_root(dir.path(), "a/../../secret.txt").is_none());
    }

    #[test]
    fn resolve_finds_existing_file() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let sub = dir.path().join("picture");
        fs::create_dir(&sub).expect("创建子目录失败");
        fs::write(sub.join("dish.png"), b"png").expect("写文件失败");

        assert!(resolve_under_root(dir.path(), "picture/dish.png").is_some());
        assert!(resolve_under_root(dir.path(), "picture/missing.png").is_none());
    }
}
