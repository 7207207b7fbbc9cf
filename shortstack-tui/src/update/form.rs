//! 输入框编辑消息处理

use shortstack_core::FormState;

use crate::message::FormMessage;
use crate::model::App;

/// 把编辑子消息应用到当前获得焦点的输入框
pub fn update(app: &mut App, msg: FormMessage) {
    let field = app.focus.field();

    match msg {
        FormMessage::Input(ch) => app.form.push_char(field, ch),
        FormMessage::Paste(text) => app.form.push_pasted(field, &text),
        FormMessage::Backspace => app.form.pop_char(field),
        FormMessage::ClearField => app.form.clear_value(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputFocus;

    #[test]
    fn edits_follow_focus() {
        let mut app = App::new("http://127.0.0.1:5000");
        update(&mut app, FormMessage::Paste("https://example.com".to_string()));

        app.focus = InputFocus::TtlHours;
        update(&mut app, FormMessage::Input('4'));
        update(&mut app, FormMessage::Input('8'));
        update(&mut app, FormMessage::Backspace);

        assert_eq!(app.form.long_url, "https://example.com");
        assert_eq!(app.form.ttl_hours, "4");

        app.focus = InputFocus::LongUrl;
        update(&mut app, FormMessage::ClearField);
        assert!(app.form.long_url.is_empty());
        assert_eq!(app.form.ttl_hours, "4");
    }
}
