pub mod raw;
pub mod record;
pub mod record_type;

pub use raw::{RawPayload, RawRecord, SoaData};
pub use record::{CanonicalRecord, RecordData};
pub use record_type::{
    class_mnemonic, type_code, type_mnemonic, RecordTypeFilter, RECORD_CLASSES, RECORD_TYPES,
    SELECTABLE_RECORD_TYPES,
};
