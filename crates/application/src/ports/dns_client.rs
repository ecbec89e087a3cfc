use async_trait::async_trait;
use dnsdiff_domain::{DomainError, RawRecord};

/// Wire-level DNS client.
///
/// Negative answers (NXDOMAIN, NODATA, SERVFAIL) come back as
/// `DomainError::NegativeAnswer`; any other failure is an upstream error.
#[async_trait]
pub trait DnsClient: Send + Sync {
    async fn query(
        &self,
        nameserver: &str,
        domain: &str,
        type_code: u16,
    ) -> Result<Vec<RawRecord>, DomainError>;
}
