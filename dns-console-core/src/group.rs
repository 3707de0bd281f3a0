//! Grouping engine for the rendered view model

use std::collections::BTreeMap;

use crate::types::DnsRecord;

/// Group records by their parent domain.
///
/// Pure transformation: no I/O, fully deterministic. The input order is
/// preserved within each group, so records arrive in the view model in the
/// order the display sort established. The `BTreeMap` keys iterate in
/// lexicographic order, which is the order domains are rendered in.
#[must_use]
pub fn group_by_domain(records: &[DnsRecord]) -> BTreeMap<String, Vec<DnsRecord>> {
    let mut groups: BTreeMap<String, Vec<DnsRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.domain.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fqdn: &str, domain: &str) -> DnsRecord {
        DnsRecord {
            fqdn: fqdn.to_string(),
            ip: "1.1.1.1".to_string(),
            domain: domain.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn union_of_groups_equals_input() {
        let records = vec![
            record("a.one.org", "one.org"),
            record("b.two.org", "two.org"),
            record("c.one.org", "one.org"),
            record("d.three.org", "three.org"),
        ];

        let groups = group_by_domain(&records);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, records.len());

        let mut grouped_fqdns: Vec<_> = groups
            .values()
            .flatten()
            .map(|r| r.fqdn.clone())
            .collect();
        grouped_fqdns.sort();
        let mut input_fqdns: Vec<_> = records.iter().map(|r| r.fqdn.clone()).collect();
        input_fqdns.sort();
        assert_eq!(grouped_fqdns, input_fqdns);
    }

    #[test]
    fn every_member_matches_its_group_key() {
        let records = vec![
            record("a.one.org", "one.org"),
            record("b.two.org", "two.org"),
            record("c.one.org", "one.org"),
        ];

        for (domain, members) in group_by_domain(&records) {
            assert!(members.iter().all(|r| r.domain == domain));
        }
    }

    #[test]
    fn domains_iterate_lexicographically() {
        let records = vec![
            record("a.zeta.org", "zeta.org"),
            record("b.alpha.org", "alpha.org"),
            record("c.mid.org", "mid.org"),
        ];

        let keys: Vec<_> = group_by_domain(&records).into_keys().collect();
        assert_eq!(keys, ["alpha.org", "mid.org", "zeta.org"]);
    }

    #[test]
    fn input_order_is_preserved_within_a_group() {
        let records = vec![
            record("z.one.org", "one.org"),
            record("a.one.org", "one.org"),
            record("m.one.org", "one.org"),
        ];

        let groups = group_by_domain(&records);
        let order: Vec<_> = groups["one.org"].iter().map(|r| r.fqdn.as_str()).collect();
        assert_eq!(order, ["z.one.org", "a.one.org", "m.one.org"]);
    }

    #[test]
    fn empty_input_yields_empty_view_model() {
        assert!(group_by_domain(&[]).is_empty());
    }
}
