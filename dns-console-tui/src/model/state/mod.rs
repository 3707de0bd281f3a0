//! 页面数据状态

mod modal;
mod records;

pub use modal::{Modal, ModalState};
pub use records::RecordsState;
