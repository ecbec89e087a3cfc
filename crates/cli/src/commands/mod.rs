mod lookup;

pub use lookup::{run_lookup, LookupArgs};
