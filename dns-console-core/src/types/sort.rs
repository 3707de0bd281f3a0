//! Display sort state

use std::cmp::Ordering;

use crate::types::DnsRecord;

/// Record field the display order is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Fqdn,
    Ip,
    #[default]
    Domain,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fqdn => "fqdn",
            Self::Ip => "ip",
            Self::Domain => "domain",
        }
    }

    /// Cycle to the next sort field
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Domain => Self::Fqdn,
            Self::Fqdn => Self::Ip,
            Self::Ip => Self::Domain,
        }
    }
}

/// Process-wide display ordering. Affects only presentation, never storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Domain,
            ascending: true,
        }
    }
}

impl SortState {
    /// Lexicographic comparison of the selected field.
    ///
    /// Equal fields compare `Equal` in both directions, so a stable sort
    /// keeps their prior relative order.
    #[must_use]
    pub fn compare(&self, a: &DnsRecord, b: &DnsRecord) -> Ordering {
        let ord = a.sort_field(self.key).cmp(b.sort_field(self.key));
        if self.ascending {
            ord
        } else {
            ord.reverse()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fqdn: &str, ip: &str, domain: &str) -> DnsRecord {
        DnsRecord {
            fqdn: fqdn.to_string(),
            ip: ip.to_string(),
            domain: domain.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn default_sorts_by_domain_ascending() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Domain);
        assert!(state.ascending);

        let a = record("a.aaa.org", "1.1.1.1", "aaa.org");
        let b = record("b.zzz.org", "1.1.1.1", "zzz.org");
        assert_eq!(state.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn descending_reverses_but_keeps_ties_equal() {
        let state = SortState {
            key: SortKey::Ip,
            ascending: false,
        };
        let a = record("a.example.com", "1.1.1.1", "example.com");
        let b = record("b.example.com", "2.2.2.2", "example.com");
        let c = record("c.example.com", "1.1.1.1", "example.com");

        assert_eq!(state.compare(&a, &b), Ordering::Greater);
        assert_eq!(state.compare(&a, &c), Ordering::Equal);
    }

    #[test]
    fn sort_key_cycle_visits_every_field() {
        let start = SortKey::Domain;
        assert_eq!(start.next().next().next(), start);
    }
}
