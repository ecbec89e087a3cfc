pub mod lookup_client;

pub use lookup_client::HttpLookupClient;
