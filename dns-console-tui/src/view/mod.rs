//! View 层：UI 渲染
//!
//! 每轮循环从 Model 整体重建画面，不做增量 diff，
//! 因此渲染结果永远与视图模型一致。

mod components;
mod layout;
mod pages;
mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个应用
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
