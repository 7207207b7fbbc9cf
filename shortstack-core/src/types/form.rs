//! 表单字段定义

use crate::traits::FormState;

/// 表单中的命名字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// 长链接
    LongUrl,
    /// 自定义别名
    Alias,
    /// 过期时间（小时）
    TtlHours,
    /// 生成的短链接
    Result,
    /// toast 消息文本
    Toast,
}

impl FormField {
    /// 用户可编辑的输入字段（按界面顺序）
    pub const INPUTS: [Self; 3] = [Self::LongUrl, Self::Alias, Self::TtlHours];

    /// `clear` 重置的字段
    pub const CLEARABLE: [Self; 4] = [Self::LongUrl, Self::Alias, Self::TtlHours, Self::Result];
}

/// 内存中的表单
///
/// 无界面场景和测试使用。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryForm {
    pub long_url: String,
    pub alias: String,
    pub ttl_hours: String,
    pub result: String,
    pub toast: String,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以三个输入字段构造
    pub fn with_inputs(long_url: &str, alias: &str, ttl_hours: &str) -> Self {
        Self {
            long_url: long_url.to_string(),
            alias: alias.to_string(),
            ttl_hours: ttl_hours.to_string(),
            ..Self::default()
        }
    }

    fn slot(&self, field: FormField) -> &String {
        match field {
            FormField::LongUrl => &self.long_url,
            FormField::Alias => &self.alias,
            FormField::TtlHours => &self.ttl_hours,
            FormField::Result => &self.result,
            FormField::Toast => &self.toast,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::LongUrl => &mut self.long_url,
            FormField::Alias => &mut self.alias,
            FormField::TtlHours => &mut self.ttl_hours,
            FormField::Result => &mut self.result,
            FormField::Toast => &mut self.toast,
        }
    }
}

impl FormState for MemoryForm {
    fn value(&self, field: FormField) -> String {
        self.slot(field).clone()
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        value.clone_into(self.slot_mut(field));
    }
}
