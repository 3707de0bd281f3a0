//! Shared type definitions

mod record;
mod sort;

pub use record::{DnsRecord, NewRecord};
pub use sort::{SortKey, SortState};
