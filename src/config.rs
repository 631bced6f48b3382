use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, AppResult, FileError};

/// 程序配置文件
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务监听端口
    pub server_port: u16,
    /// 本地图片资源根目录
    pub asset_root: String,
    /// 打印样式表路径
    pub stylesheet_path: String,
    /// 浏览器可执行文件路径（不设置时自动探测）
    pub chromium_path: Option<String>,
    /// 浏览器启动超时（秒）
    pub browser_launch_timeout_secs: u64,
    /// 菜品照片缩放边界（像素，等比缩放到该方框内）
    pub photo_box_px: u32,
    /// 矢量图标边界（像素，正方形）
    pub icon_box_px: u32,
    /// 默认页面宽度
    pub default_page_width: String,
    /// 默认页面高度
    pub default_page_height: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            asset_root: "../frontend/public".to_string(),
            stylesheet_path: "../frontend/public/css/tailwind.css".to_string(),
            chromium_path: None,
            browser_launch_timeout_secs: 30,
            photo_box_px: 200,
            icon_box_px: 96,
            default_page_width: "210mm".to_string(),
            default_page_height: "297mm".to_string(),
        }
    }
}

/// 默认配置文件名，存在时优先于环境变量
const CONFIG_FILE: &str = "menu_pdf.toml";

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            server_port: std::env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.server_port),
            asset_root: std::env::var("ASSET_ROOT").unwrap_or(default.asset_root),
            stylesheet_path: std::env::var("STYLESHEET_PATH").unwrap_or(default.stylesheet_path),
            chromium_path: std::env::var("CHROMIUM_PATH").ok().or(default.chromium_path),
            browser_launch_timeout_secs: std::env::var("BROWSER_LAUNCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_launch_timeout_secs),
            photo_box_px: std::env::var("PHOTO_BOX_PX").ok().and_then(|v| v.parse().ok()).unwrap_or(default.photo_box_px),
            icon_box_px: std::env::var("ICON_BOX_PX").ok().and_then(|v| v.parse().ok()).unwrap_or(default.icon_box_px),
            default_page_width: std::env::var("DEFAULT_PAGE_WIDTH").unwrap_or(default.default_page_width),
            default_page_height: std::env::var("DEFAULT_PAGE_HEIGHT").unwrap_or(default.default_page_height),
        }
    }

    /// 从 TOML 文件加载配置
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        let config = toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })?;
        Ok(config)
    }

    /// 加载配置：优先读取 menu_pdf.toml，失败时退回环境变量
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => return config,
                Err(e) => warn!("加载配置文件失败 {}: {}, 改用环境变量", CONFIG_FILE, e),
            }
        }
        Self::from_env()
    }
}
