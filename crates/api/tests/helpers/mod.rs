#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use dnsdiff_api::{create_api_routes, AppState};
use dnsdiff_application::ports::DnsClient;
use dnsdiff_application::use_cases::{
    BatchLookupUseCase, LookupRecordsUseCase, ResolveNameserversUseCase,
};
use dnsdiff_domain::{
    DomainError, NameserverPreset, NegativeAnswer, RawPayload, RawRecord,
};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, RwLock};
use tower::ServiceExt;

type Answer = Result<Vec<RawRecord>, DomainError>;

/// Answers keyed by (nameserver, domain, type code); anything else is NODATA.
#[derive(Clone, Default)]
pub struct MockDnsClient {
    answers: Arc<RwLock<HashMap<(String, String, u16), Answer>>>,
}

impl MockDnsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, nameserver: &str, domain: &str, type_code: u16, records: Vec<RawRecord>) {
        self.answers.write().unwrap().insert(
            (nameserver.to_string(), domain.to_string(), type_code),
            Ok(records),
        );
    }

    pub fn set_error(&self, nameserver: &str, domain: &str, type_code: u16, error: DomainError) {
        self.answers.write().unwrap().insert(
            (nameserver.to_string(), domain.to_string(), type_code),
            Err(error),
        );
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
        self.answers
            .read()
            .unwrap()
            .get(&(nameserver.to_string(), domain.to_string(), type_code))
            .cloned()
            .unwrap_or(Err(DomainError::NegativeAnswer(NegativeAnswer::NoData)))
    }
}

pub fn raw_a(name: &str, ttl: u32, ip: &str) -> RawRecord {
    let ip: IpAddr = ip.parse().unwrap();
    RawRecord::new(1, name, ttl, RawPayload::Address(ip))
}

pub fn create_test_app(client: MockDnsClient) -> Router {
    create_test_app_with_presets(client, Vec::new())
}

pub fn create_test_app_with_presets(client: MockDnsClient, presets: Vec<NameserverPreset>) -> Router {
    let lookup = Arc::new(LookupRecordsUseCase::new(Arc::new(client), 4));
    let state = AppState {
        lookup: lookup.clone(),
        batch: Arc::new(BatchLookupUseCase::new(lookup.clone(), 4)),
        nameservers: Arc::new(ResolveNameserversUseCase::new(lookup, presets, "8.8.8.8")),
    };

    Router::new().nest("/api", create_api_routes(state))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body, headers)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body, _) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(
    app: Router,
    uri: &str,
    payload: serde_json::Value,
) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    send(app, request).await
}
