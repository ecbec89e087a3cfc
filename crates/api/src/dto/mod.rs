pub mod batch;
pub mod lookup;
pub mod nameserver;

pub use batch::{BatchRequestDto, ExportQuery};
pub use lookup::LookupQuery;
pub use nameserver::NameserversQuery;
