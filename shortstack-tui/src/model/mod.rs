//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 输入焦点（LongUrl / Alias / TtlHours）
//!         mod form;           // 表单字段文本，实现 FormState
//!         mod service;        // 服务状态（标题栏）
//!         mod toast;          // 当前 toast，实现 Toaster
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: InputFocus,              // 当前输入焦点
//!             pub form: FormModel,                // 表单
//!             pub toast: ToastState,              // toast
//!             pub pending: usize,                 // 在途请求数
//!             pub service: ServiceState,          // 服务状态
//!             pub base_url: String,               // 服务地址
//!             pub show_help: bool,                // 帮助弹窗
//!             pub status_message: Option<String>, // 状态栏消息
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单与 toast
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FormModel 和 ToastState 是 App 中两个独立的字段，
//!     因此 update 层可以同时借用它们交给 FormController：
//!
//!         FormController::clear(&mut app.form, &mut app.toast);
//!
//!     ToastState 只保留一条 toast，新 toast 替换旧的；
//!     每个 tick 调用 expire() 移除到期的 toast（2500 ms）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、焦点（InputFocus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据流：
//!         用户按 Tab / ↓
//!             ↓
//!         event/handler.rs 返回 AppMessage::NextField
//!             ↓
//!         update/mod.rs 执行 app.focus = app.focus.next()
//!             ↓
//!         view 层根据 app.focus 高亮输入框边框并绘制光标
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
mod form;
mod service;
mod toast;

pub use app::App;
pub use focus::InputFocus;
pub use form::FormModel;
pub use service::ServiceState;
pub use toast::ToastState;
