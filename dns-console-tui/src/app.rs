//! 应用主循环
//!
//! 每轮循环：先消费 Backend 送回的数据消息，再渲染 UI，
//! 然后轮询输入事件（100ms 超时）并交给 Update 层。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, DataMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, mut rx: UnboundedReceiver<DataMessage>) -> Result<()> {
    loop {
        // 1. 消费 Backend 数据消息（加载/变更结果）
        while let Ok(data) = rx.try_recv() {
            update::update(app, AppMessage::Data(data));
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息并更新状态
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
