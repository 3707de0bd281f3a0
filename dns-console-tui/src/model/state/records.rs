//! 记录页面状态
//!
//! 持有记录缓存（`RecordStore`）。缓存只在这里被整体替换，
//! 加载失败时保持原样，只设置内联错误。

use dns_console_core::{group_by_domain, DnsRecord, RecordStore, SortState};

/// 记录页面状态
#[derive(Debug, Default)]
pub struct RecordsState {
    /// 记录缓存（最近一次成功加载的结果）
    pub store: RecordStore,
    /// 当前选中的行索引（按渲染顺序：域名分组展开后的行序）
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 加载错误（替代表格内联显示）
    pub error: Option<String>,
}

impl RecordsState {
    /// 创建新的记录状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换缓存并应用当前排序
    pub fn set_records(&mut self, records: Vec<DnsRecord>, sort: SortState) {
        self.store.replace(records);
        self.store.sort(sort);
        self.loading = false;
        self.error = None;
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.store.is_empty() && self.selected < self.store.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.store.is_empty() {
            self.selected = self.store.len() - 1;
        }
    }

    /// 获取当前选中的记录（按渲染顺序展开视图模型）
    pub fn selected_record(&self) -> Option<DnsRecord> {
        group_by_domain(self.store.records())
            .into_values()
            .flatten()
            .nth(self.selected)
    }
}
