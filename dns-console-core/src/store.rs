//! Client-side record cache

use crate::types::{DnsRecord, SortState};

/// The single authoritative in-memory cache of DNS records.
///
/// The store always reflects exactly the last successful load: it is
/// replaced wholesale by [`RecordStore::replace`] and never partially
/// mutated. A failed load leaves it untouched (stale-but-valid).
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<DnsRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a freshly fetched sequence.
    pub fn replace(&mut self, records: Vec<DnsRecord>) {
        self.records = records;
    }

    /// Re-order the cache for display.
    ///
    /// Uses `sort_by` (stable), so records whose sort fields compare equal
    /// keep the relative order they already had.
    pub fn sort(&mut self, state: SortState) {
        self.records.sort_by(|a, b| state.compare(a, b));
    }

    /// The records in their current display order.
    #[must_use]
    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
