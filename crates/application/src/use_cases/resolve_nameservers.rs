use crate::ports::LookupPort;
use dnsdiff_domain::{NameserverPreset, RecordData};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Nameserver presets, optionally with hostnames swapped for their first A address.
pub struct ResolveNameserversUseCase {
    lookup: Arc<dyn LookupPort>,
    presets: Vec<NameserverPreset>,
    resolver: String,
}

impl ResolveNameserversUseCase {
    pub fn new(
        lookup: Arc<dyn LookupPort>,
        presets: Vec<NameserverPreset>,
        resolver: impl Into<String>,
    ) -> Self {
        Self {
            lookup,
            presets,
            resolver: resolver.into(),
        }
    }

    pub async fn execute(&self, resolve: bool) -> Vec<NameserverPreset> {
        if !resolve {
            return self.presets.clone();
        }

        join_all(self.presets.iter().map(|preset| self.resolve_preset(preset))).await
    }

    async fn resolve_preset(&self, preset: &NameserverPreset) -> NameserverPreset {
        if !preset.is_hostname() {
            return preset.clone();
        }

        match self.lookup.lookup(&preset.address, "A", &self.resolver).await {
            Ok(result) => {
                let first = result.results.iter().find_map(|record| match &record.data {
                    RecordData::A { address } => Some(address.to_string()),
                    _ => None,
                });
                match first {
                    Some(address) => {
                        debug!(name = %preset.name, address = %address, "Resolved nameserver");
                        NameserverPreset::new(preset.name.clone(), address)
                    }
                    None => preset.clone(),
                }
            }
            Err(e) => {
                warn!(name = %preset.name, error = %e, "Failed to resolve nameserver");
                preset.clone()
            }
        }
    }
}
