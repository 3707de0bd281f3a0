//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。复杂的子消息委托给子模块处理
//! （content、modal、data）。

mod content;
mod data;
mod modal;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Data(data_msg) => {
            data::update(app, data_msg);
        }

        AppMessage::GoBack => {
            // 关闭弹窗等价于"否"决议/关闭通知
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            app.records.loading = true;
            app.set_status("Refreshing...");
            app.backend.load();
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use dns_console_core::{
        CoreError, CoreResult, DnsRecord, NewRecord, RecordsGateway, SortKey,
    };
    use tokio::runtime::Runtime;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::update;
    use crate::backend::RecordsService;
    use crate::message::{AppMessage, ContentMessage, DataMessage, ModalMessage};
    use crate::model::{App, Modal};

    /// 记录每次调用、按预设应答的模拟网关
    struct MockGateway {
        calls: Mutex<Vec<String>>,
        records: Vec<DnsRecord>,
        create_error: Option<String>,
        remove_error: Option<String>,
    }

    impl MockGateway {
        fn new(records: Vec<DnsRecord>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                records,
                create_error: None,
                remove_error: None,
            }
        }

        fn with_remove_error(mut self, message: &str) -> Self {
            self.remove_error = Some(message.to_string());
            self
        }

        fn with_create_error(mut self, message: &str) -> Self {
            self.create_error = Some(message.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordsGateway for MockGateway {
        async fn list(&self) -> CoreResult<Vec<DnsRecord>> {
            self.calls.lock().unwrap().push("list".to_string());
            Ok(self.records.clone())
        }

        async fn create(&self, record: &NewRecord) -> CoreResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create {}", record.fqdn));
            match &self.create_error {
                Some(message) => Err(CoreError::Api {
                    status: 400,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }

        async fn remove(&self, fqdn: &str) -> CoreResult<()> {
            self.calls.lock().unwrap().push(format!("delete {fqdn}"));
            match &self.remove_error {
                Some(message) => Err(CoreError::Api {
                    status: 409,
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    fn record(fqdn: &str, ip: &str, domain: &str) -> DnsRecord {
        DnsRecord {
            fqdn: fqdn.to_string(),
            ip: ip.to_string(),
            domain: domain.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    fn test_app(
        gateway: Arc<MockGateway>,
    ) -> (App, Runtime, UnboundedReceiver<DataMessage>) {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = RecordsService::new(gateway, runtime.handle().clone(), tx);
        (App::new(backend), runtime, rx)
    }

    /// 等待下一条 Backend 消息并立即交给 Update 层
    fn pump_one(app: &mut App, runtime: &Runtime, rx: &mut UnboundedReceiver<DataMessage>) {
        let data = runtime
            .block_on(async { tokio::time::timeout(Duration::from_secs(2), rx.recv()).await })
            .expect("timed out waiting for backend message")
            .expect("backend channel closed");
        update(app, AppMessage::Data(data));
    }

    #[test]
    fn declined_confirm_makes_no_network_call() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut app, _runtime, _rx) = test_app(Arc::clone(&gateway));
        app.records
            .store
            .replace(vec![record("x.example.com", "1.1.1.1", "example.com")]);

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { .. })
        ));

        // "否"：关闭弹窗，绝不触发请求
        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(app.modal.active.is_none());
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn confirm_resolves_at_most_once() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut app, runtime, mut rx) = test_app(Arc::clone(&gateway));
        app.records
            .store
            .replace(vec![record("x.example.com", "1.1.1.1", "example.com")]);

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        // 弹窗已决议并移除，重复确认是无操作
        assert!(app.modal.active.is_none());
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        pump_one(&mut app, &runtime, &mut rx); // DeleteFinished(Ok) → 触发重载
        pump_one(&mut app, &runtime, &mut rx); // LoadFinished

        let calls = gateway.calls();
        assert_eq!(
            calls.iter().filter(|c| c.starts_with("delete")).count(),
            1
        );
    }

    #[test]
    fn delete_failure_shows_notice_and_keeps_store() {
        let gateway = Arc::new(MockGateway::new(vec![]).with_remove_error("in use"));
        let (mut app, runtime, mut rx) = test_app(Arc::clone(&gateway));
        app.records
            .store
            .replace(vec![record("x.example.com", "1.1.1.1", "example.com")]);

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        pump_one(&mut app, &runtime, &mut rx);

        match &app.modal.active {
            Some(Modal::Notice { message }) => {
                assert_eq!(message, "Delete failed: in use");
            }
            other => panic!("expected notice modal, got {other:?}"),
        }
        // 失败不触发重载，缓存保持原样
        assert_eq!(app.records.store.len(), 1);
        assert_eq!(gateway.calls(), vec!["delete x.example.com".to_string()]);
    }

    #[test]
    fn load_failure_keeps_previous_records_and_shows_inline_error() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut app, _runtime, _rx) = test_app(gateway);
        app.records
            .store
            .replace(vec![record("old.example.com", "1.1.1.1", "example.com")]);

        update(
            &mut app,
            AppMessage::Data(DataMessage::LoadFinished(Err("HTTP 500".to_string()))),
        );

        let error = app.records.error.as_deref().unwrap();
        assert!(error.contains("Error loading records"));
        assert_eq!(app.records.store.len(), 1);
        assert_eq!(app.records.store.records()[0].fqdn, "old.example.com");
    }

    #[test]
    fn successful_load_replaces_store_and_applies_sort() {
        let fetched = vec![
            record("a.zeta.org", "1.1.1.1", "zeta.org"),
            record("b.alpha.org", "2.2.2.2", "alpha.org"),
        ];
        let gateway = Arc::new(MockGateway::new(fetched.clone()));
        let (mut app, _runtime, _rx) = test_app(gateway);
        app.records.error = Some("stale error".to_string());

        update(
            &mut app,
            AppMessage::Data(DataMessage::LoadFinished(Ok(fetched))),
        );

        // 默认按 domain 升序
        assert_eq!(app.records.store.records()[0].domain, "alpha.org");
        assert!(app.records.error.is_none());
        assert!(!app.records.loading);
    }

    #[test]
    fn create_success_closes_form_and_triggers_reload() {
        let gateway = Arc::new(MockGateway::new(vec![record(
            "new.example.com",
            "1.1.1.1",
            "example.com",
        )]));
        let (mut app, runtime, mut rx) = test_app(Arc::clone(&gateway));

        update(&mut app, AppMessage::Content(ContentMessage::Add));
        for c in "new.example.com".chars() {
            update(&mut app, AppMessage::Modal(ModalMessage::Input(c)));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::NextField));
        for c in "1.1.1.1".chars() {
            update(&mut app, AppMessage::Modal(ModalMessage::Input(c)));
        }
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        pump_one(&mut app, &runtime, &mut rx); // CreateFinished(Ok)

        // 表单被整体丢弃（等价于重置），随后触发重载
        assert!(app.modal.active.is_none());
        assert!(app.status_message.is_none());
        assert!(app.records.loading);

        pump_one(&mut app, &runtime, &mut rx); // LoadFinished

        assert_eq!(
            gateway.calls(),
            vec!["create new.example.com".to_string(), "list".to_string()]
        );
        assert_eq!(app.records.store.len(), 1);
    }

    #[test]
    fn create_failure_keeps_form_open_with_persistent_error() {
        let gateway = Arc::new(MockGateway::new(vec![]).with_create_error("FQDN is required"));
        let (mut app, runtime, mut rx) = test_app(Arc::clone(&gateway));

        update(&mut app, AppMessage::Content(ContentMessage::Add));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));

        pump_one(&mut app, &runtime, &mut rx);

        match &app.modal.active {
            Some(Modal::AddRecord {
                error, submitting, ..
            }) => {
                assert_eq!(error.as_deref(), Some("Error: FQDN is required"));
                assert!(!submitting);
            }
            other => panic!("expected add-record modal, got {other:?}"),
        }
        // 失败不触发重载
        assert_eq!(gateway.calls().len(), 1);
    }

    #[test]
    fn empty_store_export_is_refused_with_notice() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut app, _runtime, _rx) = test_app(gateway);

        update(&mut app, AppMessage::Content(ContentMessage::Export));

        match &app.modal.active {
            Some(Modal::Notice { message }) => {
                assert_eq!(message, "No records to export.");
            }
            other => panic!("expected notice modal, got {other:?}"),
        }
    }

    #[test]
    fn cycling_sort_key_resorts_in_place() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut app, _runtime, _rx) = test_app(gateway);
        app.records.store.replace(vec![
            record("b.example.com", "2.2.2.2", "example.com"),
            record("a.example.com", "1.1.1.1", "example.com"),
        ]);

        // domain → fqdn
        update(&mut app, AppMessage::Content(ContentMessage::CycleSortKey));
        assert_eq!(app.sort.key, SortKey::Fqdn);
        assert_eq!(app.records.store.records()[0].fqdn, "a.example.com");

        update(
            &mut app,
            AppMessage::Content(ContentMessage::ToggleSortDirection),
        );
        assert!(!app.sort.ascending);
        assert_eq!(app.records.store.records()[0].fqdn, "b.example.com");
    }
}
