//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod form;           // FormMessage：输入框编辑子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 退出应用
//!             NextField, PrevField,       // 切换输入框
//!             Form(FormMessage),          // 编辑子消息，与主消息分离
//!             Create, Copy, Clear,        // 表单的三个操作
//!             Refresh,                    // 重新探测服务状态
//!             ToggleLanguage, ToggleTheme,
//!             ShowHelp, CloseHelp,
//!             Tick,                       // 每轮主循环发送一次
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     后台任务的结果不是 Message：它们通过 backend 的 channel 返回，
//!     在处理 Tick 时统一收取。
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
