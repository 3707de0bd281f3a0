//! DNS Console Core Library
//!
//! Client-side logic for managing DNS records through a small REST API:
//! - Record cache (`RecordStore`), replaced wholesale on every load
//! - Pure grouping/sort engine for the rendered view model
//! - Mutation gateway (`RecordsGateway`) over `GET/POST/DELETE /api/records`
//! - CSV export of the current cache
//!
//! This library is UI-independent; frontends own the store and drive the
//! load → sort → group → render cycle themselves.

pub mod error;
pub mod export;
pub mod gateway;
pub mod group;
pub mod store;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use export::{export_csv, CsvExport};
pub use gateway::{HttpRecordsGateway, RecordsGateway};
pub use group::group_by_domain;
pub use store::RecordStore;
pub use types::{DnsRecord, NewRecord, SortKey, SortState};
