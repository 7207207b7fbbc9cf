//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 把 crossterm 的原始事件翻译成 AppMessage：
//!
//!     poll_event(100ms) ──▶ Some(Event) ──▶ handle_event(event, &app) ──▶ AppMessage
//!
//! 判断顺序：
//!     1. 非 Press 事件              → Noop
//!     2. Ctrl+C                      → Quit
//!     3. 帮助弹窗打开                → 只响应关闭
//!     4. 全局快捷键（keymap.rs）     → 对应消息
//!     5. 其余可打印字符 / Backspace  → FormMessage，写入当前输入框
//!
//! 输入框始终持有焦点，所以全局快捷键只用 Alt / Ctrl 组合和非字符键，
//! 裸字符（包括 `?`）一律作为输入。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
