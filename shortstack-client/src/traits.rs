use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ApiReply, HealthStatus, ShortenRequest, VersionInfo};

/// Shortstack 服务 API Trait
///
/// 实现:
/// - [`ShortstackClient`](crate::ShortstackClient): 基于 reqwest 的 HTTP 实现
/// - 测试中的内存 mock（见 `shortstack-core` 的 `test_utils`）
#[async_trait]
pub trait ShortenApi: Send + Sync {
    /// 创建短链接（单次请求，不重试）
    ///
    /// # Returns
    /// * `Ok(reply)` - 完成了一次 HTTP 交换（无论状态码是否为 2xx）
    /// * `Err(e)` - 请求未完成（网络错误、超时）
    async fn shorten(&self, request: &ShortenRequest) -> Result<ApiReply>;

    /// 服务健康检查
    async fn health(&self) -> Result<HealthStatus>;

    /// 获取服务版本
    async fn version(&self) -> Result<VersionInfo>;
}
