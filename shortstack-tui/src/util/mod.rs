//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     初始化终端：
//!
//!         enable_raw_mode()                   // 1. 原始模式：按键立即生效，不回显
//!         EnterAlternateScreen                // 2. 备用屏幕：退出后恢复原有内容
//!         EnableBracketedPaste                // 3. 粘贴内容整段到达，不被拆成按键
//!
//!     恢复终端按相反顺序执行。
//!     无论 app::run 成功与否都必须恢复，否则终端会停留在原始模式。
//!
//!
//!     日志：
//!
//!         TUI 占用了 stdout，日志只能写文件。
//!         init_logging 返回的 WorkerGuard 在 main 中持有到最后，
//!         drop 时把非阻塞写入器中剩余的日志刷到磁盘。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
