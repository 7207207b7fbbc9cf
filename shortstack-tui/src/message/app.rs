//! 应用主消息枚举

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 下一个输入框
    NextField,

    /// 上一个输入框
    PrevField,

    /// 编辑当前输入框
    Form(FormMessage),

    /// 创建短链接
    Create,

    /// 复制短链接
    Copy,

    /// 清空表单
    Clear,

    /// 重新探测服务状态
    Refresh,

    /// 切换语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 定时器：收取后台结果、移除到期 toast
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
