//! Backend 层：业务服务
//!
//! - `core_service`: 控制器 + 状态探测 + 异步桥接
//! - `config_service`: 配置文件
//! - `clipboard`: 系统剪贴板（arboard）

mod clipboard;
mod config_service;
mod core_service;

pub use clipboard::SystemClipboard;
pub use config_service::{API_URL_ENV, AppConfig, ConfigService, LocalConfigService, app_dir};
pub use core_service::{BackendEvent, CoreService};

#[cfg(test)]
pub(crate) use core_service::test_support;
