//! Message 层：事件消息定义
//!
//! Event → Update 之间的桥梁：用户操作与 Backend 结果
//! 都被翻译成消息，Update 层据此修改 Model。

mod app;
mod content;
mod data;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use data::DataMessage;
pub use modal::ModalMessage;
