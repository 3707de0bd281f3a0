//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（确认删除弹窗中等于"否"）
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 确认/提交（按当前焦点决定）
    Confirm,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
