//! 核心服务
//!
//! 封装 shortstack-core 的控制器和状态探测，
//! 并把异步调用桥接到同步的事件循环：
//!
//! ```text
//!  update (主线程)                 tokio runtime
//!  ───────────────                 ─────────────
//!  spawn_create(request) ───────▶  controller.submit(request).await
//!                                          │
//!  drain_events()  ◀──── mpsc ─────────────┘  BackendEvent::CreateFinished
//! ```

use std::sync::Arc;

use shortstack_client::{ShortenApi, ShortenRequest};
use shortstack_core::{
    Clipboard, CoreResult, CreateOutcome, FormController, ServiceStatus, StatusService,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::config_service::ConfigService;

/// 后台任务完成事件
#[derive(Debug)]
pub enum BackendEvent {
    /// 一次创建请求结束
    CreateFinished(CreateOutcome),
    /// 服务状态探测结束
    StatusChecked(CoreResult<ServiceStatus>),
}

/// TUI 核心服务
///
/// 持有 tokio runtime、表单控制器、状态探测和配置服务，提供给 Update 层调用
pub struct CoreService {
    runtime: Runtime,
    controller: FormController,
    status: Arc<StatusService>,
    config: Arc<dyn ConfigService>,
    events_tx: UnboundedSender<BackendEvent>,
    events_rx: UnboundedReceiver<BackendEvent>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(
        runtime: Runtime,
        api: Arc<dyn ShortenApi>,
        clipboard: Arc<dyn Clipboard>,
        config: Arc<dyn ConfigService>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            runtime,
            controller: FormController::new(api.clone(), clipboard),
            status: Arc::new(StatusService::new(api)),
            config,
            events_tx,
            events_rx,
        }
    }

    /// 表单控制器
    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// 配置服务
    pub fn config(&self) -> &dyn ConfigService {
        self.config.as_ref()
    }

    /// 在后台发送创建请求，结果以 [`BackendEvent::CreateFinished`] 返回
    pub fn spawn_create(&self, request: ShortenRequest) {
        let controller = self.controller.clone();
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let outcome = controller.submit(request).await;
            if tx.send(BackendEvent::CreateFinished(outcome)).is_err() {
                log::debug!("Event channel closed, dropping create outcome");
            }
        });
    }

    /// 在后台探测服务状态，结果以 [`BackendEvent::StatusChecked`] 返回
    pub fn spawn_status_check(&self) {
        let status = Arc::clone(&self.status);
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let result = status.check().await;
            if tx.send(BackendEvent::StatusChecked(result)).is_err() {
                log::debug!("Event channel closed, dropping status check");
            }
        });
    }

    /// 取出所有已完成的事件（不阻塞）
    pub fn drain_events(&mut self) -> Vec<BackendEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        events
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FixedApi, MemoryClipboard, service_with, wait_for_events};
    use super::*;

    #[test]
    fn spawned_create_reports_outcome() {
        let api = Arc::new(FixedApi::created(r#"{"shortUrl":"https://s/x1"}"#));
        let mut service = service_with(api.clone(), Arc::new(MemoryClipboard::default()));

        service.spawn_create(ShortenRequest::new("https://example.com"));
        let events = wait_for_events(&mut service, 1);

        assert!(
            matches!(
                events.as_slice(),
                [BackendEvent::CreateFinished(CreateOutcome::Created { short_link })]
                    if short_link == "https://s/x1"
            ),
            "unexpected events: {events:?}"
        );
        assert_eq!(api.requests.lock().map(|r| r.len()).unwrap_or(0), 1);
    }

    #[test]
    fn spawned_status_check_reports_status() {
        let api = Arc::new(FixedApi::unreachable());
        let mut service = service_with(api, Arc::new(MemoryClipboard::default()));

        service.spawn_status_check();
        let events = wait_for_events(&mut service, 1);

        assert!(
            matches!(events.as_slice(), [BackendEvent::StatusChecked(Err(_))]),
            "unexpected events: {events:?}"
        );
    }

    #[test]
    fn drain_without_events_is_empty() {
        let api = Arc::new(FixedApi::unreachable());
        let mut service = service_with(api, Arc::new(MemoryClipboard::default()));
        assert!(service.drain_events().is_empty());
    }
}
