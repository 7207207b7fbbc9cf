//! 剪贴板 Trait

/// 系统剪贴板
///
/// **Fire-and-forget**：`write_text` 必须立即返回，不等待写入完成，也不向调用方
/// 报告结果。写入失败只能由实现自行记录日志；调用方在调用后无条件提示
/// "Copied!"。
///
/// 实现:
/// - TUI: `SystemClipboard` (arboard，在 blocking 线程中写入)
/// - 测试: `RecordingClipboard`
pub trait Clipboard: Send + Sync {
    /// 将文本写入剪贴板（不阻塞、无确认）
    fn write_text(&self, text: String);
}
