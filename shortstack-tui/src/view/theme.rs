//! 主题与样式

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

use shortstack_core::ToastKind;

/// 0 = Dark, 1 = Light
static ACTIVE_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    ACTIVE_THEME.store(index, Ordering::Relaxed);
}

/// 获取当前主题
pub fn current_theme() -> Theme {
    match ACTIVE_THEME.load(Ordering::Relaxed) {
        0 => Theme::Dark,
        _ => Theme::Light,
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match current_theme() {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 26, 31),
            fg: Color::Rgb(220, 223, 228),
            border: Color::Rgb(68, 72, 82),
            border_focused: Color::Rgb(38, 166, 154),
            highlight: Color::Rgb(0, 121, 107),
            selected_fg: Color::Rgb(240, 250, 248),
            success: Color::Rgb(129, 199, 132),
            warning: Color::Rgb(255, 183, 77),
            error: Color::Rgb(239, 83, 80),
            info: Color::Rgb(100, 181, 246),
            muted: Color::Rgb(117, 122, 133),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(247, 248, 250),
            fg: Color::Rgb(33, 37, 41),
            border: Color::Rgb(206, 212, 218),
            border_focused: Color::Rgb(0, 137, 123),
            highlight: Color::Rgb(0, 105, 92),
            selected_fg: Color::Rgb(255, 255, 255),
            success: Color::Rgb(46, 125, 50),
            warning: Color::Rgb(230, 81, 0),
            error: Color::Rgb(198, 40, 40),
            info: Color::Rgb(21, 101, 192),
            muted: Color::Rgb(134, 142, 150),
        }
    }

    /// toast 类型对应的颜色
    pub fn toast(&self, kind: ToastKind) -> Color {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Info => self.info,
            ToastKind::Error => self.error,
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 输入框边框
    pub fn input_border(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        }
    }

    /// 占位符
    pub fn placeholder() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式（按键名）
    pub fn hint_key() -> Style {
        Style::default().fg(colors().warning).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().selected_fg)
    }
}
