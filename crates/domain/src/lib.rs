//! dnsdiff Domain Layer
pub mod comparison;
pub mod config;
pub mod dns_record;
pub mod errors;

pub use comparison::{BatchReport, DiffBlock, DiffKind, DiffSpan, DomainComparison, LookupResult};
pub use config::{CliOverrides, Config, LookupConfig, NameserverPreset, QueryProtocol};
pub use dns_record::{CanonicalRecord, RawPayload, RawRecord, RecordData, RecordTypeFilter, SoaData};
pub use errors::{DomainError, NegativeAnswer};
