//! Model 层：应用状态定义
//!
//! 应用状态的唯一真相来源。只包含纯数据结构，
//! 所有状态变更都通过 Update 层来触发。

mod app;
pub mod state;

pub use app::App;
pub use state::{Modal, ModalState, RecordsState};
