//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use shortstack_client::{
    ApiReply, ClientError, HealthStatus, Result as ClientResult, ShortenApi, ShortenRequest,
    ShortenResponse, VersionInfo,
};
use tokio::sync::RwLock;

use crate::traits::{Clipboard, Toaster};
use crate::types::Toast;

// ===== RecordingToaster =====

#[derive(Default)]
pub struct RecordingToaster {
    pub shown: Vec<Toast>,
}

impl RecordingToaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.shown.iter().map(|t| t.message.as_str()).collect()
    }
}

impl Toaster for RecordingToaster {
    fn show(&mut self, toast: Toast) {
        self.shown.push(toast);
    }
}

// ===== RecordingClipboard =====

#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: String) {
        self.writes.lock().unwrap().push(text);
    }
}

// ===== MockShortenApi =====

fn not_scripted(endpoint: &str) -> ClientError {
    ClientError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: "no scripted response".to_string(),
    }
}

/// 按脚本返回结果的 API mock，并记录收到的请求
#[derive(Default)]
pub struct MockShortenApi {
    replies: RwLock<VecDeque<ClientResult<ApiReply>>>,
    requests: RwLock<Vec<ShortenRequest>>,
    health: RwLock<Option<ClientResult<HealthStatus>>>,
    version: RwLock<Option<ClientResult<VersionInfo>>>,
}

impl MockShortenApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push_result(&self, result: ClientResult<ApiReply>) {
        self.replies.write().await.push_back(result);
    }

    pub async fn push_reply(&self, reply: ApiReply) {
        self.push_result(Ok(reply)).await;
    }

    pub async fn set_health(&self, result: ClientResult<HealthStatus>) {
        *self.health.write().await = Some(result);
    }

    pub async fn set_version(&self, result: ClientResult<VersionInfo>) {
        *self.version.write().await = Some(result);
    }

    pub async fn requests(&self) -> Vec<ShortenRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl ShortenApi for MockShortenApi {
    async fn shorten(&self, request: &ShortenRequest) -> ClientResult<ApiReply> {
        self.requests.write().await.push(request.clone());
        self.replies
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(not_scripted("POST /api/shorten")))
    }

    async fn health(&self) -> ClientResult<HealthStatus> {
        self.health
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Err(not_scripted("GET /health")))
    }

    async fn version(&self) -> ClientResult<VersionInfo> {
        self.version
            .read()
            .await
            .clone()
            .unwrap_or_else(|| Err(not_scripted("GET /version")))
    }
}

// ===== 工厂方法 =====

fn parse_body(json: &str) -> ShortenResponse {
    serde_json::from_str(json).unwrap_or_default()
}

/// 201 + 给定 JSON 响应体
pub fn created_reply(json: &str) -> ApiReply {
    ApiReply::new(201, parse_body(json))
}

/// 非 2xx + 给定响应体（无法解析时视为空对象）
pub fn rejected_reply(status: u16, body: &str) -> ApiReply {
    ApiReply::new(status, parse_body(body))
}
