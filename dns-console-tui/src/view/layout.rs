//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

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

    // 渲染标题栏
    render_title_bar(frame, title_area);

    // 渲染记录内容区
    render_records_panel(app, frame, content_area);

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" DNS Console v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染记录内容区（带边框与排序提示）
fn render_records_panel(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let sort_hint = format!(
        " sort: {} {} ",
        app.sort.key.as_str(),
        if app.sort.ascending { "↑" } else { "↓" }
    );

    let block = Block::default()
        .title(" DNS Records ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .title_bottom(sort_hint)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::records::render(app, frame, inner_area);
}
