//! 页面抽象 Trait
//!
//! 前端（TUI、测试 fake）需要实现这些 trait，控制器只通过它们访问页面。

mod clipboard;
mod form_state;
mod toaster;

pub use clipboard::Clipboard;
pub use form_state::FormState;
pub use toaster::Toaster;
