//! Backend 数据消息更新逻辑
//!
//! 同步控制器的编排：成功的变更总是触发一次完整重载，
//! 渲染只会看到整体替换后的缓存。

use crate::message::DataMessage;
use crate::model::{App, Modal};

/// 处理 Backend 数据消息
pub fn update(app: &mut App, msg: DataMessage) {
    match msg {
        DataMessage::LoadFinished(Ok(records)) => {
            // 整体替换缓存并应用当前排序
            app.records.set_records(records, app.sort);
        }

        DataMessage::LoadFinished(Err(message)) => {
            // 缓存保持原样（旧而有效），错误内联显示
            app.records.loading = false;
            app.records.error = Some(format!("Error loading records: {message}"));
        }

        DataMessage::CreateFinished(Ok(())) => {
            // 丢弃表单即重置，随后重载
            app.modal.close();
            app.clear_status();
            app.records.loading = true;
            app.backend.load();
        }

        DataMessage::CreateFinished(Err(message)) => {
            // 回到表单的持久错误行
            if let Some(Modal::AddRecord {
                ref mut error,
                ref mut submitting,
                ..
            }) = app.modal.active
            {
                *error = Some(format!("Error: {message}"));
                *submitting = false;
            } else {
                app.set_status(format!("Error: {message}"));
            }
        }

        DataMessage::DeleteFinished(Ok(())) => {
            app.clear_status();
            app.records.loading = true;
            app.backend.load();
        }

        DataMessage::DeleteFinished(Err(message)) => {
            // 删除失败是一次性的：走通知弹窗，不占用持久状态区
            app.clear_status();
            app.modal.show_notice(format!("Delete failed: {message}"));
        }
    }
}
