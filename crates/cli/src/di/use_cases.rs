use dnsdiff_api::AppState;
use dnsdiff_application::ports::LookupPort;
use dnsdiff_application::use_cases::{
    BatchLookupUseCase, LookupRecordsUseCase, ResolveNameserversUseCase,
};
use dnsdiff_domain::Config;
use dnsdiff_infrastructure::{HickoryDnsClient, HttpLookupClient};
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub lookup: Arc<LookupRecordsUseCase>,
    pub batch: Arc<BatchLookupUseCase>,
    pub nameservers: Arc<ResolveNameserversUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let client = Arc::new(HickoryDnsClient::from_config(&config.lookup));
        let lookup = Arc::new(LookupRecordsUseCase::new(
            client,
            config.lookup.any_concurrency,
        ));

        Self {
            batch: Arc::new(BatchLookupUseCase::new(
                lookup.clone(),
                config.lookup.batch_concurrency,
            )),
            nameservers: Arc::new(ResolveNameserversUseCase::new(
                lookup.clone(),
                config.lookup.nameservers.clone(),
                config.lookup.default_nameserver.clone(),
            )),
            lookup,
        }
    }

    /// Batch runner whose units go to a remote dnsdiff server.
    pub fn remote_batch(config: &Config, base_url: &str) -> BatchLookupUseCase {
        // ANY fans out on the server side, so allow for the slowest type.
        let timeout = Duration::from_millis(config.lookup.query_timeout_ms.saturating_mul(4));
        let remote: Arc<dyn LookupPort> = Arc::new(HttpLookupClient::new(base_url, timeout));
        BatchLookupUseCase::new(remote, config.lookup.batch_concurrency)
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            lookup: self.lookup,
            batch: self.batch,
            nameservers: self.nameservers,
        }
    }
}
