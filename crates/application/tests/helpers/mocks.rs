#![allow(dead_code)]

use async_trait::async_trait;
use dnsdiff_application::ports::{DnsClient, LookupPort};
use dnsdiff_domain::{
    CanonicalRecord, DomainError, LookupResult, NegativeAnswer, RawPayload, RawRecord, RecordData,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

type Answer = Result<Vec<RawRecord>, DomainError>;

/// DNS client answering from a fixed table; unknown pairs are NODATA.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    answers: Arc<RwLock<HashMap<(String, u16), Answer>>>,
    calls: Arc<Mutex<Vec<(String, String, u16)>>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, domain: &str, type_code: u16, records: Vec<RawRecord>) {
        self.answers
            .write()
            .unwrap()
            .insert((domain.to_string(), type_code), Ok(records));
    }

    pub fn set_error(&self, domain: &str, type_code: u16, error: DomainError) {
        self.answers
            .write()
            .unwrap()
            .insert((domain.to_string(), type_code), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn query(
        &self,
        nameserver: &str,
        domain: &str,
        type_code: u16,
    ) -> Result<Vec<RawRecord>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((nameserver.to_string(), domain.to_string(), type_code));

        self.answers
            .read()
            .unwrap()
            .get(&(domain.to_string(), type_code))
            .cloned()
            .unwrap_or(Err(DomainError::NegativeAnswer(NegativeAnswer::NoData)))
    }
}

/// Lookup port that records concurrency and answers per (domain, nameserver).
#[derive(Clone, Default)]
pub struct MockLookupPort {
    answers: Arc<RwLock<HashMap<(String, String), Vec<CanonicalRecord>>>>,
    failing: Arc<RwLock<Vec<String>>>,
    panicking: Arc<RwLock<Vec<String>>>,
    delay: Arc<RwLock<Duration>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    started: Arc<Mutex<Vec<String>>>,
}

impl MockLookupPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.write().unwrap() = delay;
        self
    }

    pub fn set_records(&self, domain: &str, nameserver: &str, records: Vec<CanonicalRecord>) {
        self.answers
            .write()
            .unwrap()
            .insert((domain.to_string(), nameserver.to_string()), records);
    }

    pub fn fail_domain(&self, domain: &str) {
        self.failing.write().unwrap().push(domain.to_string());
    }

    pub fn panic_on_domain(&self, domain: &str) {
        self.panicking.write().unwrap().push(domain.to_string());
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupPort for MockLookupPort {
    async fn lookup(
        &self,
        domain: &str,
        record_type: &str,
        nameserver: &str,
    ) -> Result<LookupResult, DomainError> {
        self.started.lock().unwrap().push(domain.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = *self.delay.read().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.panicking.read().unwrap().iter().any(|d| d == domain) {
            panic!("lookup panicked for {}", domain);
        }
        if self.failing.read().unwrap().iter().any(|d| d == domain) {
            return Err(DomainError::UpstreamQuery(format!("{} refused", domain)));
        }

        let records = self
            .answers
            .read()
            .unwrap()
            .get(&(domain.to_string(), nameserver.to_string()))
            .cloned()
            .unwrap_or_default();
        Ok(LookupResult::new(domain, record_type, nameserver, records))
    }
}

pub fn raw_a(name: &str, address: &str, ttl: u32) -> RawRecord {
    RawRecord::new(1, name, ttl, RawPayload::Address(address.parse().unwrap()))
}

pub fn canonical_a(name: &str, address: &str, ttl: u32) -> CanonicalRecord {
    let address: IpAddr = address.parse().unwrap();
    CanonicalRecord::new(name, ttl, "IN", RecordData::A { address })
}
