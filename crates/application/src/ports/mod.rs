pub mod dns_client;
pub mod lookup_port;

pub use dns_client::DnsClient;
pub use lookup_port::LookupPort;
