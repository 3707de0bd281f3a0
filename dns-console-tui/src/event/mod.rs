//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
