//! 应用主状态结构

use super::{FormModel, InputFocus, ServiceState, ToastState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前输入焦点
    pub focus: InputFocus,

    /// 表单字段
    pub form: FormModel,

    /// 当前 toast
    pub toast: ToastState,

    /// 尚未返回的创建请求数
    pub pending: usize,

    /// 服务状态（标题栏）
    pub service: ServiceState,

    /// 服务 base URL（标题栏显示）
    pub base_url: String,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: InputFocus::default(),
            form: FormModel::new(),
            toast: ToastState::new(),
            pending: 0,
            service: ServiceState::default(),
            base_url: base_url.into(),
            show_help: false,
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
