//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::AddRecord { .. } => render_add_record(frame, modal),
        Modal::ConfirmDelete { .. } => render_confirm_delete(frame, modal),
        Modal::Notice { message } => render_notice(frame, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内容区域（去掉边框和左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染添加记录弹窗
fn render_add_record(frame: &mut Frame, modal: &Modal) {
    let Modal::AddRecord {
        fqdn,
        ip,
        focus,
        error,
        submitting,
    } = modal
    else {
        return;
    };

    let c = colors();
    // 高度：FQDN(3) + IP(3) + 错误行(2) + 提示(1) + 边框(2)
    let area = centered_rect(50, 11, frame.area());

    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Record ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let mut lines = Vec::new();
    lines.extend(input_field("FQDN", fqdn, *focus == 0));
    lines.extend(input_field("IP Address", ip, *focus == 1));

    // 持久错误行：提交失败后一直显示
    match error {
        Some(message) => {
            lines.push(Line::styled(
                message.clone(),
                Style::default().fg(c.error),
            ));
        }
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));

    if *submitting {
        lines.push(Line::styled(
            "Submitting...",
            Style::default().fg(c.muted),
        ));
    } else {
        lines.push(Line::styled(
            "Enter Submit · Esc Cancel",
            Style::default().fg(c.muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}

/// 单个输入字段：标签 + 值（焦点字段带光标）
fn input_field(label: &str, value: &str, focused: bool) -> Vec<Line<'static>> {
    let c = colors();
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = if focused {
        format!("  {value}▎")
    } else {
        format!("  {value}")
    };

    vec![
        Line::styled(label.to_string(), label_style),
        Line::styled(
            display,
            if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(c.fg)
            },
        ),
        Line::from(""),
    ]
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmDelete { fqdn, focus } = modal else {
        return;
    };

    let c = colors();
    let area = centered_rect(44, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm Deletion ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let button = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[ {label} ]"), Style::default().fg(c.muted))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!("Delete DNS record for {fqdn}?")),
        Line::from(""),
        Line::from(vec![
            button("Cancel", *focus == 0),
            Span::raw("    "),
            button("Delete", *focus == 1),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染通知弹窗
fn render_notice(frame: &mut Frame, message: &str) {
    let c = colors();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Notice ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled(
            "[ OK ]",
            Style::default()
                .fg(c.selected_fg)
                .bg(c.selected_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(46, 14, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let entry = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(
                format!("  {key:10}"),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        entry("↑↓ / jk", "Select record"),
        entry("Alt+a", "Add record"),
        entry("Alt+d", "Delete selected record"),
        entry("Alt+x", "Export records to CSV"),
        entry("s / S", "Cycle sort field / direction"),
        entry("Alt+r", "Reload from server"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        Line::styled("  Enter / Esc to close", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
