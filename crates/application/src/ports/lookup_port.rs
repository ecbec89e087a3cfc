use async_trait::async_trait;
use dnsdiff_domain::{DomainError, LookupResult};

/// One lookup unit: a domain, a record type mnemonic and a nameserver.
#[async_trait]
pub trait LookupPort: Send + Sync {
    async fn lookup(
        &self,
        domain: &str,
        record_type: &str,
        nameserver: &str,
    ) -> Result<LookupResult, DomainError>;
}
