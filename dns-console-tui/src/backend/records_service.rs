//! 记录服务：同步控制器的异步一侧
//!
//! 每个操作派生一个 tokio 任务，完成后把结果作为一条完整的
//! `DataMessage` 发回主循环。缓存替换只发生在消费消息时，
//! 因此渲染永远不会观察到部分写入；并发加载以后完成者为准。

use std::sync::Arc;

use dns_console_core::{NewRecord, RecordsGateway};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::DataMessage;

/// 记录服务
pub struct RecordsService {
    gateway: Arc<dyn RecordsGateway>,
    handle: Handle,
    tx: UnboundedSender<DataMessage>,
}

impl RecordsService {
    /// 创建记录服务
    pub fn new(
        gateway: Arc<dyn RecordsGateway>,
        handle: Handle,
        tx: UnboundedSender<DataMessage>,
    ) -> Self {
        Self {
            gateway,
            handle,
            tx,
        }
    }

    /// 拉取全部记录
    pub fn load(&self) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = gateway.list().await.map_err(|e| e.to_string());
            // 接收端关闭说明应用正在退出，丢弃即可
            let _ = tx.send(DataMessage::LoadFinished(outcome));
        });
    }

    /// 创建记录
    pub fn create(&self, record: NewRecord) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = gateway.create(&record).await.map_err(|e| e.to_string());
            let _ = tx.send(DataMessage::CreateFinished(outcome));
        });
    }

    /// 按 fqdn 删除记录
    pub fn remove(&self, fqdn: String) {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let outcome = gateway.remove(&fqdn).await.map_err(|e| e.to_string());
            let _ = tx.send(DataMessage::DeleteFinished(outcome));
        });
    }
}
