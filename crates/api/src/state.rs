use dnsdiff_application::use_cases::{
    BatchLookupUseCase, LookupRecordsUseCase, ResolveNameserversUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupRecordsUseCase>,
    pub batch: Arc<BatchLookupUseCase>,
    pub nameservers: Arc<ResolveNameserversUseCase>,
}
