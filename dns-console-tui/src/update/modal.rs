//! 弹窗更新逻辑

use dns_console_core::NewRecord;

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match app.modal.active {
        Some(Modal::AddRecord { .. }) => handle_add_record(app, msg),
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Notice { .. } | Modal::Help) => handle_simple_modal(app, msg),
        None => {}
    }
}

/// 处理添加记录弹窗
fn handle_add_record(app: &mut App, msg: ModalMessage) {
    let Some(Modal::AddRecord {
        ref mut fqdn,
        ref mut ip,
        ref mut focus,
        error: _,
        ref mut submitting,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = (*focus + 1) % 2;
        }

        ModalMessage::Confirm => {
            // 提交中不重复发送
            if *submitting {
                return;
            }
            *submitting = true;

            // 字段原样提交，校验交给服务端；错误会回到表单的持久错误行
            let record = NewRecord {
                fqdn: fqdn.clone(),
                ip: ip.clone(),
            };
            app.set_status(format!("Adding record {}...", record.fqdn));
            app.backend.create(record);
        }

        ModalMessage::Input(ch) => {
            if *focus == 0 {
                fqdn.push(ch);
            } else {
                ip.push(ch);
            }
        }

        ModalMessage::Backspace => {
            if *focus == 0 {
                fqdn.pop();
            } else {
                ip.pop();
            }
        }

        ModalMessage::ToggleDeleteFocus => {}
    }
}

/// 处理确认删除弹窗
///
/// 弹窗在"是"与"否"两条路径上都被移除，因此一个实例最多决议一次。
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        ref fqdn,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        // "否"
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleDeleteFocus | ModalMessage::NextField | ModalMessage::PrevField => {
            *focus ^= 1;
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                // "是"：关闭弹窗后才发起请求
                let fqdn = fqdn.clone();
                app.modal.close();
                app.set_status(format!("Deleting {fqdn}..."));
                app.backend.remove(fqdn);
            } else {
                // 焦点在"取消"上，等价于"否"
                app.modal.close();
                app.clear_status();
            }
        }

        ModalMessage::Input(_) | ModalMessage::Backspace => {}
    }
}

/// 处理通知/帮助弹窗
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
