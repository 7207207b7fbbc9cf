//! 当前显示的 toast

use std::time::Instant;

use shortstack_core::{Toast, Toaster};

/// 单槽 toast：新 toast 直接替换旧的
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<(Toast, Instant)>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前可见的 toast
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    /// 到期则移除，每个 tick 调用
    pub fn expire(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|(toast, shown_at)| now.saturating_duration_since(*shown_at) >= toast.duration);
        if expired {
            self.current = None;
        }
    }

    fn show_at(&mut self, toast: Toast, now: Instant) {
        self.current = Some((toast, now));
    }
}

impl Toaster for ToastState {
    fn show(&mut self, toast: Toast) {
        self.show_at(toast, Instant::now());
    }
}
