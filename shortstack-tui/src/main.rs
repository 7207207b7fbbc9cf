//! Shortstack TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 文件日志，guard 持有到退出
//!     config.load()           // 语言、主题、服务地址
//!     Runtime::new()          // 网络请求和剪贴板写入在 runtime 中执行
//!     CoreService::new()      // 客户端 + 剪贴板 + 配置
//!     spawn_status_check()           // 标题栏的第一次服务状态探测
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 服务地址优先级：环境变量 SHORTSTACK_API_URL > 配置文件 > 默认值
//! 地址无效时在进入 TUI 之前报错退出。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use shortstack_client::ShortstackClient;

use backend::{
    API_URL_ENV, ConfigService, CoreService, LocalConfigService, SystemClipboard, app_dir,
};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（guard drop 时刷新）
    let _log_guard = init_logging(&app_dir())?;

    // 2. 配置：语言和主题立即生效
    let config = Arc::new(LocalConfigService::new());
    log::debug!("Config file: {}", config.path().display());
    let settings = config.load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    i18n::set_language(settings.language());
    view::theme::set_theme(settings.theme);

    let base_url = settings.resolve_base_url(std::env::var(API_URL_ENV).ok());
    log::info!("Using Shortstack service at {base_url}");

    // 3. 后台 runtime 与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = ShortstackClient::new(&base_url)
        .with_context(|| format!("Invalid service address '{base_url}'"))?;
    let clipboard = SystemClipboard::new(runtime.handle().clone());

    let mut backend = CoreService::new(runtime, Arc::new(client), Arc::new(clipboard), config);

    // 4. 创建应用实例，探测服务状态
    let mut app = model::App::new(base_url);
    backend.spawn_status_check();

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("TUI exited with error: {e:#}");
    }
    result
}
