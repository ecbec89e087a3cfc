use crate::ports::{DnsClient, LookupPort};
use crate::services::{dedup_records, normalize};
use async_trait::async_trait;
use dnsdiff_domain::dns_record::RECORD_TYPES;
use dnsdiff_domain::{DomainError, LookupResult, RawRecord, RecordTypeFilter};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Answers one `(domain, recordType, nameserver)` request.
pub struct LookupRecordsUseCase {
    client: Arc<dyn DnsClient>,
    any_concurrency: usize,
}

impl LookupRecordsUseCase {
    pub fn new(client: Arc<dyn DnsClient>, any_concurrency: usize) -> Self {
        Self {
            client,
            any_concurrency: any_concurrency.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        record_type: &str,
        nameserver: &str,
    ) -> Result<LookupResult, DomainError> {
        let domain = domain.trim();
        let record_type = record_type.trim();
        let nameserver = nameserver.trim();
        if domain.is_empty() || record_type.is_empty() || nameserver.is_empty() {
            return Err(DomainError::MissingParameters);
        }

        validate_domain(domain)?;
        let filter: RecordTypeFilter = record_type.parse()?;

        let raw = match &filter {
            RecordTypeFilter::Any => self.query_every_type(nameserver, domain).await,
            RecordTypeFilter::Single { code, .. } => {
                self.query_single(nameserver, domain, *code).await?
            }
        };

        let records = raw
            .iter()
            .filter_map(|record| normalize(record, &filter))
            .collect();
        let results = dedup_records(records);

        debug!(
            domain = %domain,
            record_type = %filter,
            nameserver = %nameserver,
            answers = raw.len(),
            records = results.len(),
            "Lookup complete"
        );

        Ok(LookupResult::new(domain, filter.as_str(), nameserver, results))
    }

    async fn query_single(
        &self,
        nameserver: &str,
        domain: &str,
        type_code: u16,
    ) -> Result<Vec<RawRecord>, DomainError> {
        match self.client.query(nameserver, domain, type_code).await {
            Ok(records) => Ok(records),
            Err(e) if e.is_negative_answer() => {
                debug!(domain = %domain, type_code, reason = %e, "No records");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Queries every known type; answers are concatenated in table order.
    async fn query_every_type(&self, nameserver: &str, domain: &str) -> Vec<RawRecord> {
        let client = &self.client;
        let queries: Vec<_> = RECORD_TYPES
            .iter()
            .map(|&(code, mnemonic)| async move {
                (mnemonic, client.query(nameserver, domain, code).await)
            })
            .collect();
        let outcomes: Vec<(&str, Result<Vec<RawRecord>, DomainError>)> = stream::iter(queries)
            .buffered(self.any_concurrency)
            .collect()
            .await;

        let mut aggregate = Vec::new();
        for (mnemonic, outcome) in outcomes {
            match outcome {
                Ok(records) => aggregate.extend(records),
                Err(e) if e.is_negative_answer() => {}
                Err(e) => {
                    warn!(domain = %domain, record_type = mnemonic, error = %e, "Query failed, skipping type");
                }
            }
        }
        aggregate
    }
}

#[async_trait]
impl LookupPort for LookupRecordsUseCase {
    async fn lookup(
        &self,
        domain: &str,
        record_type: &str,
        nameserver: &str,
    ) -> Result<LookupResult, DomainError> {
        self.execute(domain, record_type, nameserver).await
    }
}

fn validate_domain(domain: &str) -> Result<(), DomainError> {
    let bare = domain.strip_suffix('.').unwrap_or(domain);
    let invalid = || DomainError::InvalidDomainName(domain.to_string());

    if bare.is_empty() || bare.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid());
    }
    for label in bare.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return Err(invalid());
        }
        if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid());
        }
    }
    Ok(())
}
