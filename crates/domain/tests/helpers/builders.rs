#![allow(dead_code)]
use dnsdiff_domain::{CanonicalRecord, RecordData};
use std::net::IpAddr;
use std::str::FromStr;

pub struct CanonicalRecordBuilder {
    name: String,
    ttl: u32,
    class: String,
    data: RecordData,
}

impl CanonicalRecordBuilder {
    pub fn a(address: &str) -> Self {
        Self::with_data(RecordData::A {
            address: IpAddr::from_str(address).unwrap(),
        })
    }

    pub fn mx(preference: u16, exchange: &str) -> Self {
        Self::with_data(RecordData::Mx {
            preference,
            exchange: exchange.to_string(),
        })
    }

    pub fn txt(text: &str) -> Self {
        Self::with_data(RecordData::Txt {
            text: text.to_string(),
        })
    }

    pub fn with_data(data: RecordData) -> Self {
        Self {
            name: "example.com".to_string(),
            ttl: 300,
            class: "IN".to_string(),
            data,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> CanonicalRecord {
        CanonicalRecord::new(self.name, self.ttl, self.class, self.data)
    }
}
