use std::path::{Path, PathBuf};
use std::time::Duration;

use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult, RenderError};

/// 常见系统路径，按顺序探测
const EXECUTABLE_CANDIDATES: [&str; 4] = [
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome-stable",
    "/snap/bin/chromium",
];

/// 启动无头浏览器
///
/// 每次导出请求独占一个浏览器实例，用完由调用方关闭
pub async fn launch_headless_browser(config: &Config) -> AppResult<Browser> {
    info!("🚀 启动无头浏览器...");

    // 配置无头浏览器
    let mut builder = BrowserConfig::builder()
        .new_headless_mode()
        .launch_timeout(Duration::from_secs(config.browser_launch_timeout_secs))
        .args(vec![
            "--disable-gpu",
            "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-setuid-sandbox",
            "--disable-dev-shm-usage",   // 防止共享内存不足
            "--remote-debugging-port=0", // 让浏览器自动选择端口
        ]);

    if let Some(executable) = resolve_executable(config) {
        debug!("浏览器可执行文件: {}", executable.display());
        builder = builder.chrome_executable(executable);
    }

    let browser_config = builder.build().map_err(|message| {
        error!("配置无头浏览器失败: {}", message);
        AppError::Render(RenderError::ConfigurationFailed { message })
    })?;

    // 启动浏览器
    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        AppError::Render(RenderError::LaunchFailed {
            source: Box::new(e),
        })
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    Ok(browser)
}

/// 解析浏览器可执行文件路径
///
/// 优先使用配置（CHROMIUM_PATH），其次探测常见系统路径，
/// 都找不到时交给 chromiumoxide 自行探测
fn resolve_executable(config: &Config) -> Option<PathBuf> {
    if let Some(configured) = &config.chromium_path {
        let path = Path::new(configured);
        if path.exists() {
            return Some(path.to_path_buf());
        }
        debug!("配置的浏览器路径不存在: {}", configured);
    }

    EXECUTABLE_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists())
        .map(Path::to_path_buf)
}
