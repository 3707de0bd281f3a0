//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前状态生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    frame.render_widget(Paragraph::new(content), area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.modal.active {
        Some(Modal::AddRecord { .. }) => vec![
            ("Tab", "Next Field"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
        Some(Modal::ConfirmDelete { .. }) => vec![
            ("←→", "Choose"),
            ("Enter", "Confirm"),
            ("Esc", "Cancel"),
        ],
        Some(Modal::Notice { .. } | Modal::Help) => vec![("Enter", "OK")],
        None => {
            let mut hints = vec![
                ("↑↓", "Select"),
                ("Alt+a", "Add"),
                ("Alt+d", "Delete"),
            ];
            // 空缓存时隐藏导出入口
            if !app.records.store.is_empty() {
                hints.push(("Alt+x", "Export"));
            }
            hints.push(("s", "Sort"));
            hints.push(("Alt+r", "Refresh"));
            hints.push(("Alt+q", "Quit"));
            hints
        }
    }
}
