//! 表单字段访问 Trait

use crate::types::FormField;

/// 表单状态
///
/// 控制器每次操作时都实时读取字段，从不缓存。
///
/// 实现:
/// - TUI: `FormModel`
/// - 测试 / 无界面场景: [`MemoryForm`](crate::MemoryForm)
pub trait FormState {
    /// 读取字段当前文本（未去除空白）
    fn value(&self, field: FormField) -> String;

    /// 覆盖字段文本
    fn set_value(&mut self, field: FormField, value: &str);

    /// 清空字段
    fn clear_value(&mut self, field: FormField) {
        self.set_value(field, "");
    }
}
