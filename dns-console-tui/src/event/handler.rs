//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_content_keys(key)
}

/// 处理记录列表的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_EXPORT.matches(&key) {
        return AppMessage::Content(ContentMessage::Export);
    }
    if DefaultKeymap::SORT_KEY.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleSortKey);
    }
    if DefaultKeymap::SORT_DIRECTION.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSortDirection);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Delete 键同样触发删除流程
        KeyCode::Delete => AppMessage::Content(ContentMessage::Delete),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.modal.active {
        Some(Modal::AddRecord { .. }) => handle_add_record_keys(key),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete_keys(key),
        Some(Modal::Notice { .. } | Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

/// 添加记录弹窗的按键
fn handle_add_record_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}
