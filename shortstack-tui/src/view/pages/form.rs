//! 表单页视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shortstack_core::FormField;
use unicode_width::UnicodeWidthChar;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{Styles, colors};

/// 光标
const CURSOR: &str = "▎";

/// 渲染表单页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 长链接
            Constraint::Length(3), // 别名
            Constraint::Length(3), // 有效期
            Constraint::Length(1),
            Constraint::Length(3), // 结果
            Constraint::Length(1), // 在途请求
            Constraint::Min(0),
        ])
        .split(area);

    for (field, row) in FormField::INPUTS.into_iter().zip(rows.iter()) {
        let (label, placeholder) = match field {
            FormField::LongUrl => (texts.long_url, texts.long_url_placeholder),
            FormField::Alias => (texts.alias, texts.alias_placeholder),
            _ => (texts.ttl_hours, texts.ttl_hours_placeholder),
        };
        render_input(app, frame, *row, field, label, placeholder);
    }

    render_result(app, frame, rows[4]);
    render_pending(app, frame, rows[5]);
}

/// 渲染一个输入框
fn render_input(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    label: &str,
    placeholder: &str,
) {
    let c = colors();
    let focused = app.focus.is(field);
    let value = app.form.text(field);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::input_border(focused));
    let inner = block.inner(area);

    let line = if value.is_empty() && !focused {
        Line::styled(format!(" {placeholder}"), Styles::placeholder())
    } else if focused {
        // 留出前导空格和光标的宽度，文本过长时显示末尾
        let width = usize::from(inner.width).saturating_sub(2);
        Line::from(vec![
            Span::styled(format!(" {}", visible_tail(value, width)), Style::default().fg(c.fg)),
            Span::styled(CURSOR, Style::default().fg(c.border_focused)),
        ])
    } else {
        let width = usize::from(inner.width).saturating_sub(1);
        Line::styled(format!(" {}", visible_tail(value, width)), Style::default().fg(c.fg))
    };

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
}

/// 渲染结果框
fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().form;
    let c = colors();
    let result = app.form.text(FormField::Result);

    let border = if result.is_empty() { c.border } else { c.success };
    let block = Block::default()
        .title(format!(" {} ", texts.result))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let line = if result.is_empty() {
        Line::styled(format!(" {}", texts.result_placeholder), Styles::placeholder())
    } else {
        let width = usize::from(inner.width).saturating_sub(1);
        Line::styled(
            format!(" {}", visible_tail(result, width)),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    };

    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
}

/// 有请求在途时显示数量
fn render_pending(app: &App, frame: &mut Frame, area: Rect) {
    if app.pending == 0 {
        return;
    }

    let line = Line::styled(
        format!("  ⟳ {}: {}", t().form.pending, app.pending),
        Style::default().fg(colors().warning),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 显示宽度不超过 `width` 的最长后缀
///
/// 按字符显示宽度（CJK 占 2 列）计算，保证光标所在的末尾总是可见。
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();

    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = idx;
    }

    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(visible_tail("https://a.io", 20), "https://a.io");
        assert_eq!(visible_tail("", 5), "");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("https://example.com/path", 4), "path");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(visible_tail("例子例子", 5), "例子");
        assert_eq!(visible_tail("a例子", 4), "例子");
    }
}
