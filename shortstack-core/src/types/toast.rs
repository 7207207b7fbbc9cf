//! Toast 通知

use std::time::Duration;

/// 每个 toast 的显示时长
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// 控制器产生的固定提示文本
pub mod messages {
    pub const CREATED: &str = "Short link created";
    pub const COPIED: &str = "Copied!";
    pub const NOTHING_TO_COPY: &str = "Nothing to copy";
    pub const CLEARED: &str = "Cleared";
    pub const INVALID_TTL: &str = "TTL hours must be a number";
    pub const NETWORK_ERROR_PREFIX: &str = "Network error";
}

/// Toast 类型（决定前端配色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// 一条 toast 通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}
