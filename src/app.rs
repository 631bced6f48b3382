use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::api;
use crate::config::Config;
use crate::workflow::ExportFlow;

/// 应用主结构
pub struct App {
    config: Arc<Config>,
    router: Router,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let config = Arc::new(config);
        let flow = Arc::new(ExportFlow::new(config.clone()));
        let router = api::router(flow);

        Ok(Self { config, router })
    }

    /// 运行 HTTP 服务
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("无法监听 {}", addr))?;

        info!("✅ 后端服务已启动: http://{}", addr);

        axum::serve(listener, self.router)
            .await
            .context("HTTP 服务异常退出")?;

        Ok(())
    }
}

/// 记录程序启动信息
fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 菜单 PDF 导出服务启动");
    info!("📁 资源根目录: {}", config.asset_root);
    info!("📄 默认页面: {} x {}", config.default_page_width, config.default_page_height);
    info!("{}", "=".repeat(60));
}
