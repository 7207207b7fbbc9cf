//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use shortstack_core::ServiceStatus;

use crate::i18n::t;
use crate::model::{App, ServiceState};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();

    // 整屏背景
    frame.render_widget(Block::default().style(Style::default().bg(c.bg).fg(c.fg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);
    render_form_content(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);

    // 浮层（在最上层）
    components::toast::render(app, frame, content_area);
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏：应用名、服务版本、在线状态、服务地址
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().title_bar;
    let c = colors();
    let bar = Styles::statusbar();

    let (version, state_text, state_color) = match &app.service {
        ServiceState::Checking => (texts.unknown_version.to_string(), texts.checking, c.warning),
        ServiceState::Reachable(status) => (
            status
                .version
                .as_deref()
                .map_or_else(|| texts.unknown_version.to_string(), |v| format!("v{v}")),
            texts.online,
            c.success,
        ),
        ServiceState::Unreachable => (texts.unknown_version.to_string(), texts.offline, c.error),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", t().common.app_name),
            bar.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{version}  "), bar),
        Span::styled("● ", bar.fg(state_color)),
        Span::styled(format!("{state_text}  "), bar),
        Span::styled(app.base_url.as_str(), bar),
    ];

    if let ServiceState::Reachable(ServiceStatus {
        server_time: Some(time),
        ..
    }) = &app.service
    {
        spans.push(Span::styled(
            format!("  {} {} UTC", texts.server_time, time.format("%H:%M")),
            bar.fg(c.muted),
        ));
    }

    let line = Line::from(spans);

    frame.render_widget(Paragraph::new(line).style(bar), area);
}

/// 渲染表单页外框
fn render_form_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().form.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::form::render(app, frame, inner_area);
}
