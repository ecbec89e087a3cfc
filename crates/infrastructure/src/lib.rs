//! dnsdiff Infrastructure Layer
pub mod dns;
pub mod http;

pub use dns::HickoryDnsClient;
pub use http::HttpLookupClient;
