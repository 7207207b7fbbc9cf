//! reqwest 实现的 Shortstack 客户端

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{ClientError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::ShortenApi;
use crate::types::{ApiReply, HealthStatus, ShortenRequest, ShortenResponse, VersionInfo};

/// 创建短链接接口路径（相对于 base URL）
pub const SHORTEN_PATH: &str = "api/shorten";
/// 健康检查接口路径
pub const HEALTH_PATH: &str = "health";
/// 版本接口路径
pub const VERSION_PATH: &str = "version";

/// Shortstack HTTP 客户端
#[derive(Debug, Clone)]
pub struct ShortstackClient {
    client: Client,
    base_url: Url,
}

impl ShortstackClient {
    /// 使用默认 HTTP Client 创建
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http_client(base_url, create_http_client()?)
    }

    /// 使用自定义 HTTP Client 创建
    pub fn with_http_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// 服务 base URL（总是以 `/` 结尾）
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接接口 URL
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                detail: e.to_string(),
            })
    }

    /// 执行 GET 请求并严格解析 JSON
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let endpoint = format!("GET /{path}");

        let (status, text) = HttpUtils::execute_request(self.client.get(url), &endpoint).await?;

        if !(200..300).contains(&status) {
            log::warn!("[shortstack] {endpoint} returned HTTP {status}");
            return Err(ClientError::UnexpectedStatus { endpoint, status });
        }

        HttpUtils::parse_json(&text, &endpoint)
    }
}

#[async_trait]
impl ShortenApi for ShortstackClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ApiReply> {
        let url = self.endpoint_url(SHORTEN_PATH)?;
        let endpoint = format!("POST /{SHORTEN_PATH}");

        log::debug!(
            "[shortstack] Request Body: {}",
            serde_json::to_string(request).unwrap_or_else(|_| "<unserializable>".to_string())
        );

        // `.json()` 同时设置 Content-Type: application/json
        let (status, text) =
            HttpUtils::execute_request(self.client.post(url).json(request), &endpoint).await?;

        let body: ShortenResponse = HttpUtils::parse_json_or_default(&text, &endpoint);
        Ok(ApiReply::new(status, body))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.get_json(HEALTH_PATH).await
    }

    async fn version(&self) -> Result<VersionInfo> {
        self.get_json(VERSION_PATH).await
    }
}

/// 规范化 base URL
///
/// - 去除首尾空白和末尾的 `/`，再补一个 `/`，使 `join` 总是追加路径
/// - 仅允许 http / https
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |detail: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        detail,
    };

    let url = Url::parse(&format!("{trimmed}/")).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme '{}', only http/https are allowed",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}
