pub mod batch;
pub mod lookup;
pub mod reference;

pub use batch::{export_batch, run_batch};
pub use lookup::lookup;
pub use reference::{get_nameservers, get_record_types, health_check};
