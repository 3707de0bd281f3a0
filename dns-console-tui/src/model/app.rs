//! 应用主状态结构

use dns_console_core::SortState;

use super::{ModalState, RecordsState};
use crate::backend::RecordsService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前显示排序（进程级，只影响显示顺序）
    pub sort: SortState,

    /// 记录页面状态（含记录缓存）
    pub records: RecordsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// Backend 服务（异步 API 调用）
    pub backend: RecordsService,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend: RecordsService) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            sort: SortState::default(),
            records: RecordsState::new(),
            modal: ModalState::new(),
            backend,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
