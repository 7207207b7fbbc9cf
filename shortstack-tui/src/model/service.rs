//! 服务状态（标题栏）

use shortstack_core::{CoreResult, ServiceStatus};

/// 最近一次探测的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceState {
    /// 探测中
    #[default]
    Checking,
    /// `/health` 可达
    Reachable(ServiceStatus),
    /// `/health` 不可达
    Unreachable,
}

impl ServiceState {
    pub fn from_check(result: CoreResult<ServiceStatus>) -> Self {
        match result {
            Ok(status) => ServiceState::Reachable(status),
            Err(e) => {
                log::log!(e.log_level(), "Service status check failed: {e}");
                ServiceState::Unreachable
            }
        }
    }
}
