use crate::ports::LookupPort;
use crate::services::{compare_record_sets, render_block, sort_records};
use dnsdiff_domain::{BatchReport, DomainComparison, DomainError, LookupResult, RecordTypeFilter};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub domains: Vec<String>,
    pub record_type: String,
    pub nameserver1: String,
    pub nameserver2: Option<String>,
    pub concurrency: Option<usize>,
}

impl BatchRequest {
    /// Domains one per line; blank lines are dropped.
    pub fn parse_domains(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Completed units against the fixed total. Advisory only.
#[derive(Debug, Default)]
pub struct BatchProgress {
    current: AtomicUsize,
    total: AtomicUsize,
}

impl BatchProgress {
    pub fn current(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    fn reset(&self, total: usize) {
        self.current.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    fn advance(&self) -> usize {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }
}

struct Unit {
    slot: usize,
    domain: String,
    nameserver: String,
}

/// Runs every (domain, nameserver) unit of a batch with a bounded number in flight.
pub struct BatchLookupUseCase {
    lookup: Arc<dyn LookupPort>,
    default_concurrency: usize,
}

impl BatchLookupUseCase {
    pub fn new(lookup: Arc<dyn LookupPort>, default_concurrency: usize) -> Self {
        Self {
            lookup,
            default_concurrency: default_concurrency.max(1),
        }
    }

    pub async fn execute(&self, request: BatchRequest) -> Result<BatchReport, DomainError> {
        self.execute_with_progress(request, Arc::new(BatchProgress::default()))
            .await
    }

    pub async fn execute_with_progress(
        &self,
        request: BatchRequest,
        progress: Arc<BatchProgress>,
    ) -> Result<BatchReport, DomainError> {
        let domains: Vec<String> = request
            .domains
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
        if domains.is_empty() {
            return Err(DomainError::NoDomains);
        }

        let nameserver1 = request.nameserver1.trim().to_string();
        if nameserver1.is_empty() || request.record_type.trim().is_empty() {
            return Err(DomainError::MissingParameters);
        }
        let nameserver2 = request
            .nameserver2
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .map(str::to_string);
        let filter: RecordTypeFilter = request.record_type.parse()?;
        let record_type = filter.as_str().to_string();

        let mut nameservers = vec![nameserver1];
        nameservers.extend(nameserver2);
        let width = nameservers.len();
        let total = domains.len() * width;
        // More permits than units buys nothing; this also keeps the semaphore under MAX_PERMITS.
        let limit = request
            .concurrency
            .unwrap_or(self.default_concurrency)
            .clamp(1, total.max(1));

        progress.reset(total);
        info!(
            domains = domains.len(),
            record_type = %record_type,
            compare = width == 2,
            total,
            limit,
            "Starting batch lookup"
        );

        let semaphore = Arc::new(Semaphore::new(limit));
        let mut pending = FuturesUnordered::new();

        for (index, domain) in domains.iter().enumerate() {
            for (side, nameserver) in nameservers.iter().enumerate() {
                let unit = Unit {
                    slot: index * width + side,
                    domain: domain.clone(),
                    nameserver: nameserver.clone(),
                };

                let permit = semaphore
                    .clone()
                    .acquire_owned()
                    .await
                    .map_err(|e| DomainError::UpstreamQuery(e.to_string()))?;
                let lookup = Arc::clone(&self.lookup);
                let progress = Arc::clone(&progress);
                let task_domain = unit.domain.clone();
                let task_nameserver = unit.nameserver.clone();
                let task_type = record_type.clone();

                let handle = tokio::spawn(async move {
                    let _permit = permit;
                    let outcome = lookup
                        .lookup(&task_domain, &task_type, &task_nameserver)
                        .await;
                    let done = progress.advance();
                    debug!(domain = %task_domain, nameserver = %task_nameserver, done, "Unit finished");
                    outcome
                });

                pending.push(async move { (unit, handle.await) });
            }
        }

        let mut slots: Vec<Option<LookupResult>> = vec![None; total];
        while let Some((unit, joined)) = pending.next().await {
            let result = match joined {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => {
                    warn!(domain = %unit.domain, nameserver = %unit.nameserver, error = %e, "Lookup failed");
                    LookupResult::empty(&unit.domain, &record_type, &unit.nameserver)
                }
                Err(e) => {
                    warn!(domain = %unit.domain, nameserver = %unit.nameserver, error = %e, "Lookup task aborted");
                    LookupResult::empty(&unit.domain, &record_type, &unit.nameserver)
                }
            };
            slots[unit.slot] = Some(result);
        }

        let mut slots = slots.into_iter();
        let mut results = Vec::with_capacity(domains.len());
        for domain in &domains {
            let mut sides: Vec<LookupResult> = nameservers
                .iter()
                .map(|nameserver| {
                    slots
                        .next()
                        .flatten()
                        .unwrap_or_else(|| LookupResult::empty(domain, &record_type, nameserver))
                })
                .collect();
            for side in &mut sides {
                sort_records(&mut side.results);
            }

            let diff = match sides.as_slice() {
                [left, right] => Some(
                    compare_record_sets(&left.results, &right.results, &filter)
                        .into_iter()
                        .map(|(record_type, spans)| (record_type, render_block(spans)))
                        .collect(),
                ),
                _ => None,
            };

            results.push(DomainComparison {
                domain: domain.clone(),
                results: sides,
                diff,
            });
        }

        let completed = progress.current();
        info!(total, completed, "Batch lookup finished");

        Ok(BatchReport {
            total,
            completed,
            results,
        })
    }
}
