//! Remote lookup client
//!
//! Runs lookup units against another dnsdiff server's `/api/lookup` endpoint,
//! so the CLI can batch through a running service instead of querying directly.

use async_trait::async_trait;
use dnsdiff_application::ports::LookupPort;
use dnsdiff_domain::{DomainError, LookupResult};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("dnsdiff/1.0 (remote-lookup)")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LookupPort for HttpLookupClient {
    async fn lookup(
        &self,
        domain: &str,
        record_type: &str,
        nameserver: &str,
    ) -> Result<LookupResult, DomainError> {
        let url = format!("{}/api/lookup", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("domain", domain),
                ("recordType", record_type),
                ("nameserver", nameserver),
            ])
            .send()
            .await
            .map_err(|e| DomainError::UpstreamQuery(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            DomainError::UpstreamQuery(format!("Failed to read response from {}: {}", url, e))
        })?;

        debug!(url = %url, status = %status, bytes = body.len(), "Remote lookup response");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(DomainError::UpstreamQuery(message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Malformed lookup response: {}", e))
        })
    }
}
