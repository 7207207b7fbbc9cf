//! 表单数据

use shortstack_core::{FormField, FormState};

/// 表单页的字段文本
///
/// 实现 [`FormState`]，由 `FormController` 直接读写。
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    pub long_url: String,
    pub alias: String,
    pub ttl_hours: String,
    pub result: String,
    /// 最近一条 toast 的文本
    pub toast_body: String,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::LongUrl => &mut self.long_url,
            FormField::Alias => &mut self.alias,
            FormField::TtlHours => &mut self.ttl_hours,
            FormField::Result => &mut self.result,
            FormField::Toast => &mut self.toast_body,
        }
    }

    /// 字段文本的只读引用（渲染用，避免克隆）
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::LongUrl => &self.long_url,
            FormField::Alias => &self.alias,
            FormField::TtlHours => &self.ttl_hours,
            FormField::Result => &self.result,
            FormField::Toast => &self.toast_body,
        }
    }

    /// 在字段末尾追加字符
    pub fn push_char(&mut self, field: FormField, ch: char) {
        self.slot_mut(field).push(ch);
    }

    /// 追加粘贴的文本：只取第一行，去除控制字符
    pub fn push_pasted(&mut self, field: FormField, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        self.slot_mut(field)
            .extend(line.chars().filter(|c| !c.is_control()));
    }

    /// 删除字段最后一个字符
    pub fn pop_char(&mut self, field: FormField) {
        self.slot_mut(field).pop();
    }
}

impl FormState for FormModel {
    fn value(&self, field: FormField) -> String {
        self.text(field).to_string()
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        value.clone_into(self.slot_mut(field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_appends_and_pops_chars() {
        let mut form = FormModel::new();
        for ch in "https://例子.com".chars() {
            form.push_char(FormField::LongUrl, ch);
        }
        form.pop_char(FormField::LongUrl);
        assert_eq!(form.long_url, "https://例子.co");

        form.pop_char(FormField::Alias);
        assert_eq!(form.alias, "");
    }

    #[test]
    fn paste_keeps_first_line_only() {
        let mut form = FormModel::new();
        form.push_char(FormField::Alias, 'a');
        form.push_pasted(FormField::Alias, "b\tc\r\nsecond line");
        assert_eq!(form.alias, "abc");
    }

    #[test]
    fn form_state_writes_through() {
        let mut form = FormModel::new();
        form.set_value(FormField::Result, "https://s/x1");
        form.set_value(FormField::Toast, "Short link created");
        assert_eq!(form.value(FormField::Result), "https://s/x1");
        assert_eq!(form.text(FormField::Toast), "Short link created");
    }
}
