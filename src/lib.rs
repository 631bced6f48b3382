//! # Menu PDF Export
//!
//! 餐厅菜单编辑器的后端服务：把编辑器渲染出的菜单 HTML
//! 转换为指定物理尺寸的打印版 PDF
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PdfRenderer` - 唯一的 page owner，提供渲染能力
//! - `image_codec` / `assets` - 图片重编码与资源路径解析
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个模块一种变换能力
//! - `sanitize` - 表单控件替换 / 图标筛选 / 占位符清理
//! - `inline_images` - 本地图片内联为 data URI
//! - `document_shell` - 打印文档外壳
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/export_flow` - 定义"一次导出"的完整流程，
//!   管理浏览器实例的获取与释放
//!
//! ### ④ 接口层（API）
//! - `api/` - axum 路由，POST /generate-pdf
//!
//! 另有 `models/` 存放菜单领域模型和表格交换格式，
//! `browser/` 负责无头浏览器的启动。

pub mod api;
pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{MenuItem, MenuOption, PageSize};
pub use workflow::{ExportFlow, ExportRequest};
