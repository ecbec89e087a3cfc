pub mod errors;
pub mod logging;
pub mod lookup;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::{LookupConfig, NameserverPreset, QueryProtocol};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
