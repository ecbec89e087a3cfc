pub mod client;
pub mod forwarding;
pub mod nameserver;
pub mod transport;

pub use client::HickoryDnsClient;
pub use forwarding::{DnsResponse, MessageBuilder, ResponseParser};
pub use nameserver::resolve_nameserver;
