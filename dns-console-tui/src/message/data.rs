//! Backend 数据消息
//!
//! 异步操作的完成结果。失败已在 Backend 层归一化成字符串，
//! Update 层只有一条失败路径。

use dns_console_core::DnsRecord;

/// Backend 数据消息
#[derive(Debug, Clone)]
pub enum DataMessage {
    /// 加载完成：成功携带完整记录序列，整体替换缓存
    LoadFinished(Result<Vec<DnsRecord>, String>),

    /// 创建完成
    CreateFinished(Result<(), String>),

    /// 删除完成
    DeleteFinished(Result<(), String>),
}
