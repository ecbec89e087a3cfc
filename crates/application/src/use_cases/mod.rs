pub mod batch_lookup;
pub mod lookup_records;
pub mod resolve_nameservers;

pub use batch_lookup::{BatchLookupUseCase, BatchProgress, BatchRequest};
pub use lookup_records::LookupRecordsUseCase;
pub use resolve_nameservers::ResolveNameserversUseCase;
