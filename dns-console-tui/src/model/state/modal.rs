//! 弹窗/对话框状态

/// 弹窗类型
///
/// 每种弹窗都是一个变体，携带该弹窗的所有数据。
/// 关闭弹窗即丢弃数据，因此每个实例最多只能"决议"一次。
#[derive(Debug, Clone)]
pub enum Modal {
    /// 添加记录表单
    AddRecord {
        /// FQDN 输入
        fqdn: String,
        /// IP 地址输入
        ip: String,
        /// 当前焦点：0=FQDN, 1=IP
        focus: usize,
        /// 持久错误信息（提交失败时显示，直到下次提交或关闭）
        error: Option<String>,
        /// 是否已提交、等待结果
        submitting: bool,
    },
    /// 确认删除
    ConfirmDelete {
        /// 待删除记录的 fqdn
        fqdn: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 一次性通知（OK 关闭）
    Notice { message: String },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示添加记录弹窗
    pub fn show_add_record(&mut self) {
        self.active = Some(Modal::AddRecord {
            fqdn: String::new(),
            ip: String::new(),
            focus: 0,
            error: None,
            submitting: false,
        });
    }

    /// 显示确认删除弹窗
    pub fn show_confirm_delete(&mut self, fqdn: &str) {
        self.active = Some(Modal::ConfirmDelete {
            fqdn: fqdn.to_string(),
            focus: 0,
        });
    }

    /// 显示通知弹窗
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.active = Some(Modal::Notice {
            message: message.into(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
