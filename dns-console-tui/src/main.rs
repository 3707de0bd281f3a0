//! DNS Console TUI
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 启动顺序：初始化终端 → 创建应用实例 → 触发首次加载 → 主循环 → 恢复终端。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use dns_console_core::HttpRecordsGateway;
use tokio::sync::mpsc;

use backend::RecordsService;
use util::{init_terminal, restore_terminal};

/// API 地址环境变量
const API_ENV: &str = "DNS_CONSOLE_API";
/// 默认 API 地址
const DEFAULT_API: &str = "http://127.0.0.1:8000";

fn main() -> Result<()> {
    // 1. 创建异步运行时与 Backend 通道
    let runtime = tokio::runtime::Runtime::new()?;
    let (tx, rx) = mpsc::unbounded_channel();

    let base_url = std::env::var(API_ENV).unwrap_or_else(|_| DEFAULT_API.to_string());
    let gateway = Arc::new(HttpRecordsGateway::new(base_url));
    let backend = RecordsService::new(gateway, runtime.handle().clone(), tx);

    // 2. 初始化终端
    let mut terminal = init_terminal()?;

    // 3. 创建应用实例并触发首次加载
    let mut app = model::App::new(backend);
    app.records.loading = true;
    app.backend.load();

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app, rx);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
