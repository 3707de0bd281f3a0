//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== CRUD 操作 ==========
    /// 添加新记录
    Add,
    /// 删除当前选中记录（先弹出确认）
    Delete,

    // ========== 导出 ==========
    /// 导出当前缓存为 CSV
    Export,

    // ========== 排序 ==========
    /// 切换排序字段
    CycleSortKey,
    /// 反转排序方向
    ToggleSortDirection,
}
