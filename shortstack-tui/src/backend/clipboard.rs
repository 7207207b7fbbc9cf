//! 系统剪贴板
//!
//! 实现 shortstack-core 的 `Clipboard` trait（fire-and-forget）

use std::sync::{Arc, Mutex, PoisonError};

use shortstack_core::{Clipboard, CoreError, CoreResult};
use tokio::runtime::Handle;

/// 基于 arboard 的系统剪贴板
///
/// 写入在 runtime 的 blocking 线程池中执行，`write_text` 立即返回；
/// 结果只记录日志。arboard 句柄首次写入时创建并保持存活，
/// 以便 X11 / Wayland 下剪贴板内容在写入后仍然可用。
pub struct SystemClipboard {
    handle: Handle,
    inner: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            inner: Arc::new(Mutex::new(None)),
        }
    }
}

fn write_blocking(inner: &Mutex<Option<arboard::Clipboard>>, text: String) -> CoreResult<()> {
    let mut guard = inner.lock().unwrap_or_else(PoisonError::into_inner);

    if guard.is_none() {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| CoreError::ClipboardError(format!("Clipboard unavailable: {e}")))?;
        *guard = Some(clipboard);
    }

    if let Some(clipboard) = guard.as_mut() {
        clipboard
            .set_text(text)
            .map_err(|e| CoreError::ClipboardError(format!("Failed to copy to clipboard: {e}")))?;
    }

    Ok(())
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: String) {
        let inner = Arc::clone(&self.inner);
        let len = text.chars().count();

        // JoinHandle 直接丢弃：不等待、不确认
        self.handle.spawn_blocking(move || match write_blocking(&inner, text) {
            Ok(()) => log::debug!("Copied {len} characters to clipboard"),
            Err(e) => log::log!(e.log_level(), "{e}"),
        });
    }
}
