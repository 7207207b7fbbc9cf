//! 输入事件 → 消息

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Paste(text) => paste_message(&text),
        // 终端窗口大小改变等：下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 粘贴（bracketed paste）：整段文本一次写入当前输入框
fn paste_message(text: &str) -> AppMessage {
    if text.is_empty() {
        AppMessage::Noop
    } else {
        AppMessage::Form(FormMessage::Paste(text.to_string()))
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助弹窗打开时只响应关闭
    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) => AppMessage::CloseHelp,
            KeyCode::Char('h') if key.modifiers == KeyModifiers::ALT => AppMessage::CloseHelp,
            _ => AppMessage::Noop,
        };
    }

    if let Some(msg) = global_message(&key) {
        return msg;
    }

    handle_input_keys(key)
}

/// 全局快捷键
fn global_message(key: &KeyEvent) -> Option<AppMessage> {
    let msg = if DefaultKeymap::QUIT.matches(key) || DefaultKeymap::BACK.matches(key) {
        AppMessage::Quit
    } else if DefaultKeymap::HELP.matches(key) || DefaultKeymap::HELP_F1.matches(key) {
        AppMessage::ShowHelp
    } else if DefaultKeymap::REFRESH.matches(key) {
        AppMessage::Refresh
    } else if DefaultKeymap::LANGUAGE.matches(key) {
        AppMessage::ToggleLanguage
    } else if DefaultKeymap::THEME.matches(key) {
        AppMessage::ToggleTheme
    } else if DefaultKeymap::CREATE.matches(key) || DefaultKeymap::CREATE_ALT.matches(key) {
        AppMessage::Create
    } else if DefaultKeymap::COPY.matches(key) {
        AppMessage::Copy
    } else if DefaultKeymap::CLEAR.matches(key) {
        AppMessage::Clear
    } else if DefaultKeymap::NEXT_FIELD.matches(key) || DefaultKeymap::NEXT_FIELD_ALT.matches(key)
    {
        AppMessage::NextField
    } else if key.code == KeyCode::BackTab || DefaultKeymap::PREV_FIELD_ALT.matches(key) {
        // 部分终端上报 BackTab 时带 SHIFT，部分不带
        AppMessage::PrevField
    } else if DefaultKeymap::CLEAR_FIELD.matches(key) {
        AppMessage::Form(FormMessage::ClearField)
    } else {
        return None;
    };
    Some(msg)
}

/// 输入框中的编辑按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn msg_for(code: KeyCode, modifiers: KeyModifiers) -> AppMessage {
        handle_event(press(code, modifiers), &App::new("http://127.0.0.1:5000"))
    }

    #[test]
    fn actions_are_bound() {
        assert!(matches!(msg_for(KeyCode::Enter, KeyModifiers::NONE), AppMessage::Create));
        assert!(matches!(msg_for(KeyCode::Char('s'), KeyModifiers::ALT), AppMessage::Create));
        assert!(matches!(msg_for(KeyCode::Char('c'), KeyModifiers::ALT), AppMessage::Copy));
        assert!(matches!(msg_for(KeyCode::Char('l'), KeyModifiers::ALT), AppMessage::Clear));
        assert!(matches!(msg_for(KeyCode::Char('r'), KeyModifiers::ALT), AppMessage::Refresh));
    }

    #[test]
    fn typing_goes_to_the_form() {
        assert!(matches!(
            msg_for(KeyCode::Char('?'), KeyModifiers::NONE),
            AppMessage::Form(FormMessage::Input('?'))
        ));
        assert!(matches!(
            msg_for(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            AppMessage::Form(FormMessage::Input('Q'))
        ));
        assert!(matches!(
            msg_for(KeyCode::Backspace, KeyModifiers::NONE),
            AppMessage::Form(FormMessage::Backspace)
        ));
    }

    #[test]
    fn quit_keys() {
        assert!(matches!(msg_for(KeyCode::Esc, KeyModifiers::NONE), AppMessage::Quit));
        assert!(matches!(msg_for(KeyCode::Char('q'), KeyModifiers::ALT), AppMessage::Quit));
        assert!(matches!(msg_for(KeyCode::Char('c'), KeyModifiers::CONTROL), AppMessage::Quit));
    }

    #[test]
    fn field_navigation() {
        assert!(matches!(msg_for(KeyCode::Tab, KeyModifiers::NONE), AppMessage::NextField));
        assert!(matches!(msg_for(KeyCode::BackTab, KeyModifiers::SHIFT), AppMessage::PrevField));
        assert!(matches!(msg_for(KeyCode::Up, KeyModifiers::NONE), AppMessage::PrevField));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = App::new("http://127.0.0.1:5000");
        app.show_help = true;

        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));

        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::CloseHelp));
    }

    #[test]
    fn paste_is_forwarded_whole() {
        let msg = handle_event(
            Event::Paste("https://example.com/?q=1".to_string()),
            &App::new("http://127.0.0.1:5000"),
        );
        assert!(matches!(
            msg,
            AppMessage::Form(FormMessage::Paste(ref text)) if text == "https://example.com/?q=1"
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        let msg = handle_event(event, &App::new("http://127.0.0.1:5000"));
        assert!(matches!(msg, AppMessage::Noop));
    }
}
