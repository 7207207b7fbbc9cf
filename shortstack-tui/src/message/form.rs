//! 输入框编辑消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符
    Input(char),

    /// 粘贴文本（只保留第一行，去除控制字符）
    Paste(String),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前输入框（Ctrl+U）
    ClearField,
}
