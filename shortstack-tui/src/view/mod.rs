//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每轮主循环都会根据当前 Model 完整重绘一帧。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 / 表单 / 状态栏 + 浮层
//!         mod pages;          // 表单页
//!         mod components;     // 状态栏、toast、帮助弹窗
//!         pub mod theme;      // 颜色方案与常用样式
//!
//!
//!     屏幕布局：
//!
//!         ┌───────────────────────────────────────────────┐
//!         │ Shortstack v1.2.3  ● online  http://…         │  标题栏
//!         ├───────────────────────────────────────────────┤
//!         │ ┌ Long URL ─────────────────────────────────┐ │
//!         │ │ https://example.com/…▎                    │ │
//!         │ └───────────────────────────────────────────┘ │
//!         │   Alias / TTL hours / Short link ...          │  表单页
//!         │                               ┌────────────┐  │
//!         │                               │  Copied!   │  │  toast（右下角）
//!         │                               └────────────┘  │
//!         ├───────────────────────────────────────────────┤
//!         │ Tab/↑↓ Field │ Enter Create │ ...             │  状态栏
//!         └───────────────────────────────────────────────┘
//!
//!     帮助弹窗打开时居中覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
