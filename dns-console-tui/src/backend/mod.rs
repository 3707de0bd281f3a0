//! Backend 层：业务服务
//!
//! 与 UI 完全解耦。API 调用在 tokio 运行时上执行，
//! 结果以 `DataMessage` 经无界通道送回主循环。

mod records_service;

pub use records_service::RecordsService;
