//! Toast 浮层
//!
//! 显示在内容区右下角，颜色由 [`ToastKind`](shortstack_core::ToastKind) 决定。
//! 到期移除由 update 层的 Tick 负责，这里只渲染当前可见的一条。

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::colors;

/// 距内容区边缘的留白
const MARGIN: u16 = 2;

/// 渲染当前 toast（如果有）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(toast) = app.toast.visible() else {
        return;
    };

    let c = colors();
    let color = c.toast(toast.kind);

    // 文本宽度 + 左右边框和内边距
    let text_width = u16::try_from(toast.message.width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(4)
        .min(area.width.saturating_sub(MARGIN));
    let height = 3.min(area.height);

    let x = area.x + area.width.saturating_sub(width + MARGIN);
    let y = area.y + area.height.saturating_sub(height + 1);
    let toast_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(c.bg));

    let paragraph = Paragraph::new(toast.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(paragraph, toast_area);
}
