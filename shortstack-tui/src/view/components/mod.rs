//! 通用组件

pub mod help;
pub mod statusbar;
pub mod toast;
