//! 焦点状态定义

use shortstack_core::FormField;

/// 当前获得焦点的输入框
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    LongUrl,
    Alias,
    TtlHours,
}

impl InputFocus {
    /// 下一个输入框（循环）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            InputFocus::LongUrl => InputFocus::Alias,
            InputFocus::Alias => InputFocus::TtlHours,
            InputFocus::TtlHours => InputFocus::LongUrl,
        }
    }

    /// 上一个输入框（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            InputFocus::LongUrl => InputFocus::TtlHours,
            InputFocus::Alias => InputFocus::LongUrl,
            InputFocus::TtlHours => InputFocus::Alias,
        }
    }

    /// 对应的表单字段
    pub fn field(self) -> FormField {
        match self {
            InputFocus::LongUrl => FormField::LongUrl,
            InputFocus::Alias => FormField::Alias,
            InputFocus::TtlHours => FormField::TtlHours,
        }
    }

    /// 是否为给定字段
    pub fn is(self, field: FormField) -> bool {
        self.field() == field
    }
}
