use dnsdiff_domain::{CanonicalRecord, RecordData};

const NAME_WIDTH: usize = 30;

/// Type-specific value column of a formatted line.
pub fn format_value(record: &CanonicalRecord) -> String {
    match &record.data {
        RecordData::A { address } | RecordData::Aaaa { address } => address.to_string(),
        RecordData::Ns { target } | RecordData::Cname { target } => target.clone(),
        RecordData::Mx {
            preference,
            exchange,
        } => format!("{:02} {}", preference, exchange),
        RecordData::Txt { text } if text.is_empty() => String::new(),
        RecordData::Txt { text } => format!("\"{}\"", text),
        RecordData::Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => format!(
            "{} {} {} {} {} {} {}",
            mname, rname, serial, refresh, retry, expire, minimum
        ),
        RecordData::Other { value, .. } => value.clone(),
    }
}

/// Name (30, truncated), TTL (7, right-aligned), class (5), type (10), value.
pub fn format_line(record: &CanonicalRecord) -> String {
    let name: String = record.name.chars().take(NAME_WIDTH).collect();
    let line = format!(
        "{:<30} {:>7} {:<5} {:<10} {}",
        name,
        record.ttl,
        record.class,
        record.record_type(),
        format_value(record)
    );
    line.trim_end().to_string()
}

pub fn format_block(records: &[CanonicalRecord]) -> String {
    records
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sort key used before display and diffing.
pub fn comparison_value(record: &CanonicalRecord) -> String {
    match &record.data {
        RecordData::A { address } | RecordData::Aaaa { address } => address.to_string(),
        RecordData::Ns { target } | RecordData::Cname { target } => target.clone(),
        RecordData::Mx { .. } | RecordData::Txt { .. } | RecordData::Soa { .. } => {
            format_value(record)
        }
        RecordData::Other { .. } => serde_json::to_string(record).unwrap_or_default(),
    }
}
