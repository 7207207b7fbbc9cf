//! 服务状态

use chrono::{DateTime, Utc};

/// 服务状态（标题栏显示）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceStatus {
    /// `/health` 返回 `status: "ok"`
    pub online: bool,
    /// `/version` 返回的版本号；获取失败时为 `None`
    pub version: Option<String>,
    /// `/health` 返回的服务端时间（标题栏显示）
    pub server_time: Option<DateTime<Utc>>,
}
