//! 记录页面视图
//!
//! 按域名分组渲染：域名键以字典序出现，组内保持显示排序。
//! 加载失败时内联显示错误文本，取代表格。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use dns_console_core::group_by_domain;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染记录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(ref error) = app.records.error {
        render_error(frame, area, error);
    } else if app.records.store.is_empty() {
        if app.records.loading {
            render_loading(frame, area);
        } else {
            render_empty(frame, area);
        }
    } else {
        render_groups(app, frame, area);
    }
}

/// 渲染加载错误（缓存保持原内容，但错误状态优先显示）
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::styled(error.to_string(), Style::default().fg(c.error)),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// 渲染加载中状态
fn render_loading(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  Loading records...", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No DNS records found.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press Alt+a to add a new record.",
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染分组记录列表
fn render_groups(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let groups = group_by_domain(app.records.store.records());

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_item = 0;
    let mut row_index = 0;

    for (domain, records) in &groups {
        // 域名小节标题
        items.push(ListItem::new(Line::styled(
            format!("Domain: {domain}"),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )));
        // 表头
        items.push(ListItem::new(Line::styled(
            format!("  {:32} {:15}", "FQDN", "IP Address"),
            Style::default().fg(c.muted),
        )));

        for record in records {
            let is_selected = row_index == app.records.selected;
            if is_selected {
                selected_item = items.len();
            }

            let row_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let mut spans = vec![Span::styled(
                format!("  {:32} {:15}", record.fqdn, record.ip),
                row_style,
            )];
            if is_selected {
                spans.push(Span::styled(
                    "  Alt+d Delete",
                    Style::default().fg(c.muted).bg(c.selected_bg),
                ));
            }
            items.push(ListItem::new(Line::from(spans)));

            row_index += 1;
        }

        // 组间空行
        items.push(ListItem::new(Line::from("")));
    }

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(selected_item));

    frame.render_stateful_widget(list, area, &mut state);
}
