//! 内容面板更新逻辑

use std::fs;

use dns_console_core::export_csv;

use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.records.select_previous();
        }
        ContentMessage::SelectNext => {
            app.records.select_next();
        }
        ContentMessage::SelectFirst => {
            app.records.select_first();
        }
        ContentMessage::SelectLast => {
            app.records.select_last();
        }

        // ========== CRUD 操作 ==========
        ContentMessage::Add => {
            app.modal.show_add_record();
        }
        ContentMessage::Delete => {
            handle_delete(app);
        }

        // ========== 导出 ==========
        ContentMessage::Export => {
            handle_export(app);
        }

        // ========== 排序 ==========
        ContentMessage::CycleSortKey => {
            app.sort.key = app.sort.key.next();
            app.records.store.sort(app.sort);
            app.set_status(format!("Sorted by {}", app.sort.key.as_str()));
        }
        ContentMessage::ToggleSortDirection => {
            app.sort.ascending = !app.sort.ascending;
            app.records.store.sort(app.sort);
            app.set_status(format!(
                "Sorted by {} ({})",
                app.sort.key.as_str(),
                if app.sort.ascending {
                    "ascending"
                } else {
                    "descending"
                }
            ));
        }
    }
}

/// 删除流程的入口：只弹出确认，真正的请求要等用户决议"是"
fn handle_delete(app: &mut App) {
    if let Some(record) = app.records.selected_record() {
        app.modal.show_confirm_delete(&record.fqdn);
    }
}

/// 导出当前缓存为 CSV 文件
fn handle_export(app: &mut App) {
    match export_csv(app.records.store.records()) {
        Ok(export) => match fs::write(&export.suggested_filename, &export.content) {
            Ok(()) => {
                app.modal.show_notice(format!(
                    "Exported {} DNS records to CSV.",
                    app.records.store.len()
                ));
            }
            Err(e) => {
                app.modal
                    .show_notice(format!("Export failed: {e}"));
            }
        },
        // 空缓存："No records to export."
        Err(e) => {
            app.modal.show_notice(e.to_string());
        }
    }
}
