use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Type-specific fields of a canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A {
        address: IpAddr,
    },
    Aaaa {
        address: IpAddr,
    },
    Ns {
        target: String,
    },
    Cname {
        target: String,
    },
    Mx {
        preference: u16,
        exchange: String,
    },
    Txt {
        text: String,
    },
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
    Other {
        record_type: String,
        value: String,
    },
}

/// A normalized answer: shared envelope plus the per-type payload.
///
/// Serializes to a flat object (`name`, `ttl`, `type`, `class`, then the
/// fields of its type) whose field order is stable, so the JSON text doubles
/// as a structural identity key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordWire", into = "RecordWire")]
pub struct CanonicalRecord {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    pub data: RecordData,
}

impl CanonicalRecord {
    pub fn new(name: impl Into<String>, ttl: u32, class: impl Into<String>, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            class: class.into(),
            data,
        }
    }

    pub fn record_type(&self) -> &str {
        match &self.data {
            RecordData::A { .. } => "A",
            RecordData::Aaaa { .. } => "AAAA",
            RecordData::Ns { .. } => "NS",
            RecordData::Cname { .. } => "CNAME",
            RecordData::Mx { .. } => "MX",
            RecordData::Txt { .. } => "TXT",
            RecordData::Soa { .. } => "SOA",
            RecordData::Other { record_type, .. } => record_type,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RecordWire {
    name: String,
    ttl: u32,
    #[serde(rename = "type")]
    record_type: String,
    class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preference: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    serial: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expire: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minimum: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl RecordWire {
    fn envelope(record: &CanonicalRecord) -> Self {
        Self {
            name: record.name.clone(),
            ttl: record.ttl,
            record_type: record.record_type().to_string(),
            class: record.class.clone(),
            address: None,
            target: None,
            preference: None,
            exchange: None,
            text: None,
            mname: None,
            rname: None,
            serial: None,
            refresh: None,
            retry: None,
            expire: None,
            minimum: None,
            value: None,
        }
    }
}

fn required<T>(field: Option<T>, record_type: &str, name: &str) -> Result<T, DomainError> {
    field.ok_or_else(|| {
        DomainError::InvalidDnsResponse(format!("{} record is missing field '{}'", record_type, name))
    })
}

fn parse_address(raw: Option<String>, record_type: &str) -> Result<IpAddr, DomainError> {
    let raw = required(raw, record_type, "address")?;
    raw.parse()
        .map_err(|_| DomainError::InvalidDnsResponse(format!("invalid address '{}'", raw)))
}

impl TryFrom<RecordWire> for CanonicalRecord {
    type Error = DomainError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        let t = wire.record_type.as_str();
        let data = match t {
            "A" => RecordData::A {
                address: parse_address(wire.address, t)?,
            },
            "AAAA" => RecordData::Aaaa {
                address: parse_address(wire.address, t)?,
            },
            "NS" => RecordData::Ns {
                target: required(wire.target, t, "target")?,
            },
            "CNAME" => RecordData::Cname {
                target: required(wire.target, t, "target")?,
            },
            "MX" => RecordData::Mx {
                preference: required(wire.preference, t, "preference")?,
                exchange: required(wire.exchange, t, "exchange")?,
            },
            "TXT" => RecordData::Txt {
                text: wire.text.unwrap_or_default(),
            },
            "SOA" => RecordData::Soa {
                mname: required(wire.mname, t, "mname")?,
                rname: required(wire.rname, t, "rname")?,
                serial: required(wire.serial, t, "serial")?,
                refresh: required(wire.refresh, t, "refresh")?,
                retry: required(wire.retry, t, "retry")?,
                expire: required(wire.expire, t, "expire")?,
                minimum: required(wire.minimum, t, "minimum")?,
            },
            _ => RecordData::Other {
                record_type: wire.record_type.clone(),
                value: wire.value.unwrap_or_default(),
            },
        };

        Ok(CanonicalRecord {
            name: wire.name,
            ttl: wire.ttl,
            class: wire.class,
            data,
        })
    }
}

impl From<CanonicalRecord> for RecordWire {
    fn from(record: CanonicalRecord) -> Self {
        let mut wire = RecordWire::envelope(&record);
        match record.data {
            RecordData::A { address } | RecordData::Aaaa { address } => {
                wire.address = Some(address.to_string());
            }
            RecordData::Ns { target } | RecordData::Cname { target } => {
                wire.target = Some(target);
            }
            RecordData::Mx {
                preference,
                exchange,
            } => {
                wire.preference = Some(preference);
                wire.exchange = Some(exchange);
            }
            RecordData::Txt { text } => wire.text = Some(text),
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => {
                wire.mname = Some(mname);
                wire.rname = Some(rname);
                wire.serial = Some(serial);
                wire.refresh = Some(refresh);
                wire.retry = Some(retry);
                wire.expire = Some(expire);
                wire.minimum = Some(minimum);
            }
            RecordData::Other { value, .. } => wire.value = Some(value),
        }
        wire
    }
}
