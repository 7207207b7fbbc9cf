//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const HELP_F1: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));

    // 字段切换
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const NEXT_FIELD_ALT: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const PREV_FIELD_ALT: KeyBinding = KeyBinding::key(KeyCode::Up);

    // 表单操作
    pub const CREATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const CREATE_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const COPY: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const CLEAR: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const CLEAR_FIELD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
