use crate::types::Toast;

/// 临时通知（toast）显示 Trait
///
/// 不排队：新 toast 与正在显示的 toast 如何共存由实现决定
/// （TUI 直接替换）。
pub trait Toaster {
    /// 显示 toast，持续时间见 [`Toast::duration`]
    fn show(&mut self, toast: Toast);
}
