use dnsdiff_domain::dns_record::{class_mnemonic, type_mnemonic};
use dnsdiff_domain::{CanonicalRecord, RawPayload, RawRecord, RecordData, RecordTypeFilter};

/// Maps a raw answer onto its canonical shape.
///
/// Returns `None` when the answer's type is not the one asked for. Payloads
/// that do not fit their type code fall back to the generic `value` form.
pub fn normalize(raw: &RawRecord, filter: &RecordTypeFilter) -> Option<CanonicalRecord> {
    let mnemonic = type_mnemonic(raw.type_code);
    if !filter.matches(&mnemonic) {
        return None;
    }

    let data = match (raw.type_code, &raw.payload) {
        (1, RawPayload::Address(address)) => RecordData::A { address: *address },
        (28, RawPayload::Address(address)) => RecordData::Aaaa { address: *address },
        (2, RawPayload::Name(target)) => RecordData::Ns {
            target: target.clone(),
        },
        (5, RawPayload::Name(target)) => RecordData::Cname {
            target: target.clone(),
        },
        (
            15,
            RawPayload::Mx {
                preference,
                exchange,
            },
        ) => RecordData::Mx {
            preference: *preference,
            exchange: exchange.clone(),
        },
        (16, RawPayload::Text(segments)) => RecordData::Txt {
            text: segments.concat(),
        },
        (6, RawPayload::Soa(soa)) => RecordData::Soa {
            mname: soa.mname.clone(),
            rname: soa.rname.clone(),
            serial: soa.serial,
            refresh: soa.refresh,
            retry: soa.retry,
            expire: soa.expire,
            minimum: soa.minimum,
        },
        (_, payload) => RecordData::Other {
            record_type: mnemonic,
            value: payload.to_string(),
        },
    };

    Some(CanonicalRecord::new(
        raw.name.clone(),
        raw.ttl,
        class_mnemonic(raw.class_code),
        data,
    ))
}
