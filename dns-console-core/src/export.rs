//! CSV export of the current record cache

use chrono::Local;

use crate::error::{CoreError, CoreResult};
use crate::types::DnsRecord;

/// Column header of the exported file
pub const CSV_HEADER: &str = "FQDN,IP Address,Domain";

/// A finished export: the file content plus a suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// CSV content, `text/csv;charset=utf-8`
    pub content: String,
    /// `dns_records_<ISO-date>.csv`
    pub suggested_filename: String,
}

/// Export `records` in their current order.
///
/// Refuses an empty cache with [`CoreError::NothingToExport`] so the caller
/// can surface a notice instead of producing an empty file.
pub fn export_csv(records: &[DnsRecord]) -> CoreResult<CsvExport> {
    if records.is_empty() {
        return Err(CoreError::NothingToExport);
    }

    Ok(CsvExport {
        content: csv_content(records),
        suggested_filename: format!("dns_records_{}.csv", Local::now().format("%Y-%m-%d")),
    })
}

fn csv_content(records: &[DnsRecord]) -> String {
    let rows: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "{},{},{}",
                quoted(&r.fqdn),
                quoted(&r.ip),
                quoted(&r.domain)
            )
        })
        .collect();
    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}

/// Double-quote a field, doubling interior quotes (RFC 4180).
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
