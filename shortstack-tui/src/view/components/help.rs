//! 帮助弹窗

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::view::theme::{Styles, colors};

/// 弹窗宽度
const WIDTH: u16 = 56;

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let help = &t().help;
    let c = colors();

    let sections = [
        (help.editing, help.editing_keys),
        (help.actions, help.action_keys),
        (help.app, help.app_keys),
    ];

    // 按键列按最宽的按键对齐
    let key_width = sections
        .iter()
        .flat_map(|(_, keys)| keys.iter())
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (title, keys) in sections {
        lines.push(Line::styled(
            title,
            Style::default().fg(c.info).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in keys {
            let padding = key_width.saturating_sub(key.width());
            lines.push(Line::from(vec![
                Span::styled(format!("  {key}{:padding$}  ", ""), Styles::hint_key()),
                Span::styled(*desc, Style::default().fg(c.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(help.close_hint, Styles::placeholder()));

    // 内容行数 + 上下边框
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_screens() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(56, 20, area), Rect::new(0, 0, 40, 10));
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
    }
}
