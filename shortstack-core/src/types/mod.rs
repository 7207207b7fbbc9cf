//! 类型定义模块

mod form;
mod outcome;
mod status;
mod toast;

pub use form::{FormField, MemoryForm};
pub use outcome::CreateOutcome;
pub use status::ServiceStatus;
pub use toast::{TOAST_DURATION, Toast, ToastKind, messages};

// Re-export client 库的公共类型
pub use shortstack_client::{ApiReply, ShortenRequest, ShortenResponse, TtlHours};
