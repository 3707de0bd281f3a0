//! 应用主消息枚举

use super::{ContentMessage, DataMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// Backend 数据消息（异步操作完成）
    Data(DataMessage),

    /// 返回/关闭（Esc）
    GoBack,

    /// 重新加载记录
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
