//! 服务状态探测（`/health` + `/version`）

use std::sync::Arc;

use futures::future::join;
use shortstack_client::ShortenApi;

use crate::error::CoreResult;
use crate::types::ServiceStatus;

/// 服务状态探测（无状态）
pub struct StatusService {
    api: Arc<dyn ShortenApi>,
}

impl StatusService {
    pub fn new(api: Arc<dyn ShortenApi>) -> Self {
        Self { api }
    }

    /// 并发请求 `/health` 和 `/version`
    ///
    /// `/health` 失败即返回错误；`/version` 失败只记录日志，版本显示为未知。
    pub async fn check(&self) -> CoreResult<ServiceStatus> {
        let (health, version) = join(self.api.health(), self.api.version()).await;

        let health = health?;
        let version = match version {
            Ok(info) => Some(info.version),
            Err(e) => {
                log::warn!("Failed to fetch service version: {e}");
                None
            }
        };

        Ok(ServiceStatus {
            online: health.is_ok(),
            version,
            server_time: health.time,
        })
    }
}
