use super::record_formatter::comparison_value;
use dnsdiff_domain::CanonicalRecord;
use rustc_hash::FxHashSet;

/// Drops structurally identical records, keeping first occurrences in order.
pub fn dedup_records(records: Vec<CanonicalRecord>) -> Vec<CanonicalRecord> {
    let mut seen = FxHashSet::default();
    records
        .into_iter()
        .filter(|record| seen.insert(identity_key(record)))
        .collect()
}

fn identity_key(record: &CanonicalRecord) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| format!("{:?}", record))
}

/// Stable sort by (comparison value, name).
pub fn sort_records(records: &mut [CanonicalRecord]) {
    records.sort_by_cached_key(|record| (comparison_value(record), record.name.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdiff_domain::RecordData;

    fn a(name: &str, address: &str, ttl: u32) -> CanonicalRecord {
        CanonicalRecord::new(
            name,
            ttl,
            "IN",
            RecordData::A {
                address: address.parse().unwrap(),
            },
        )
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let records = vec![
            a("example.com", "192.0.2.2", 300),
            a("example.com", "192.0.2.1", 300),
            a("example.com", "192.0.2.2", 300),
            a("example.com", "192.0.2.2", 60),
        ];

        let deduped = dedup_records(records);

        assert_eq!(
            deduped,
            vec![
                a("example.com", "192.0.2.2", 300),
                a("example.com", "192.0.2.1", 300),
                a("example.com", "192.0.2.2", 60),
            ]
        );
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let records = vec![
            a("example.com", "192.0.2.1", 300),
            a("example.com", "192.0.2.1", 300),
        ];

        let once = dedup_records(records);
        let twice = dedup_records(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_by_value_then_name() {
        let mut records = vec![
            a("b.example.com", "192.0.2.1", 300),
            a("z.example.com", "192.0.2.0", 300),
            a("a.example.com", "192.0.2.1", 300),
        ];

        sort_records(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["z.example.com", "a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut records = vec![
            a("example.com", "192.0.2.1", 300),
            a("example.com", "192.0.2.1", 60),
        ];

        sort_records(&mut records);

        assert_eq!(records[0].ttl, 300);
        assert_eq!(records[1].ttl, 60);
    }
}
