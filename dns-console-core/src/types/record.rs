//! DNS record type definitions

use serde::{Deserialize, Serialize};

use super::SortKey;

/// A single DNS record as served by the boundary API.
///
/// Identity key is `fqdn` (uniqueness enforced by the server, not here).
/// Records are immutable once fetched; the client only ever replaces the
/// whole cache on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Fully-qualified domain name
    pub fqdn: String,
    /// IP address the record points at
    pub ip: String,
    /// Parent domain (server-derived from the fqdn)
    pub domain: String,
    /// Any further server-defined fields, passed through opaquely
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DnsRecord {
    /// Value of the field a [`SortKey`] selects, for display ordering.
    #[must_use]
    pub fn sort_field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Fqdn => &self.fqdn,
            SortKey::Ip => &self.ip,
            SortKey::Domain => &self.domain,
        }
    }
}

/// Request payload for creating a record.
///
/// The server extracts the parent domain itself, so only the user-entered
/// fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub fqdn: String,
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_server_fields_are_passed_through() {
        let json = r#"{"fqdn":"a.example.com","ip":"1.1.1.1","domain":"example.com","ttl":600}"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.fqdn, "a.example.com");
        assert_eq!(record.extra.get("ttl"), Some(&serde_json::json!(600)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back.get("ttl"), Some(&serde_json::json!(600)));
    }
}
