use dnsdiff_domain::{DomainError, NegativeAnswer, RawPayload, RawRecord, SoaData};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<RawRecord>,
}

impl DnsResponse {
    /// Classifies the response: answers, a negative answer, or an upstream error.
    pub fn into_records(self, nameserver: &str, domain: &str) -> Result<Vec<RawRecord>, DomainError> {
        match self.rcode {
            ResponseCode::NoError if self.answers.is_empty() => {
                Err(DomainError::NegativeAnswer(NegativeAnswer::NoData))
            }
            ResponseCode::NoError => Ok(self.answers),
            ResponseCode::NXDomain => Err(DomainError::NegativeAnswer(NegativeAnswer::NxDomain)),
            ResponseCode::ServFail => Err(DomainError::NegativeAnswer(NegativeAnswer::ServFail)),
            rcode => Err(DomainError::UpstreamQuery(format!(
                "{} querying {} for {}",
                ResponseParser::rcode_to_status(rcode),
                nameserver,
                domain
            ))),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers: Vec<RawRecord> = message.answers().iter().map(Self::to_raw).collect();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    fn to_raw(record: &Record) -> RawRecord {
        let payload = match record.data() {
            RData::A(a) => RawPayload::Address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => RawPayload::Address(IpAddr::V6(aaaa.0)),
            RData::NS(ns) => RawPayload::Name(name_to_string(&ns.0)),
            RData::CNAME(cname) => RawPayload::Name(name_to_string(&cname.0)),
            RData::MX(mx) => RawPayload::Mx {
                preference: mx.preference(),
                exchange: name_to_string(mx.exchange()),
            },
            RData::TXT(txt) => RawPayload::Text(
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            ),
            RData::SOA(soa) => RawPayload::Soa(SoaData {
                mname: name_to_string(soa.mname()),
                rname: name_to_string(soa.rname()),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum: soa.minimum(),
            }),
            other => RawPayload::Other(other.to_string()),
        };

        RawRecord::new(
            u16::from(record.record_type()),
            name_to_string(record.name()),
            record.ttl(),
            payload,
        )
        .with_class(u16::from(record.dns_class()))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

/// Presentation form without the trailing root dot.
fn name_to_string(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => text,
    }
}
