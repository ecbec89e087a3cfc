use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// Type-specific part of an answer as decoded off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPayload {
    Address(IpAddr),
    Name(String),
    Mx { preference: u16, exchange: String },
    Text(Vec<String>),
    Soa(SoaData),
    /// Presentation form of anything the client does not decode itself.
    Other(String),
}

impl fmt::Display for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPayload::Address(ip) => write!(f, "{}", ip),
            RawPayload::Name(name) => write!(f, "{}", name),
            RawPayload::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RawPayload::Text(segments) => write!(f, "{}", segments.concat()),
            RawPayload::Soa(soa) => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
            RawPayload::Other(value) => write!(f, "{}", value),
        }
    }
}

/// One answer entry exactly as the DNS client produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub type_code: u16,
    pub class_code: u16,
    pub name: String,
    pub ttl: u32,
    pub payload: RawPayload,
}

impl RawRecord {
    pub fn new(type_code: u16, name: impl Into<String>, ttl: u32, payload: RawPayload) -> Self {
        Self {
            type_code,
            class_code: 1,
            name: name.into(),
            ttl,
            payload,
        }
    }

    pub fn with_class(mut self, class_code: u16) -> Self {
        self.class_code = class_code;
        self
    }
}
