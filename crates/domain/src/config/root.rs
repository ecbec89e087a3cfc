use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::{LookupConfig, QueryProtocol};
use super::server::ServerConfig;

const LOCAL_CONFIG: &str = "dnsdiff.toml";
const SYSTEM_CONFIG: &str = "/etc/dnsdiff/config.toml";

/// Main configuration structure for dnsdiff
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Outbound query and batch configuration
    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsdiff.toml in current directory
    /// 3. /etc/dnsdiff/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(protocol) = overrides.protocol {
            self.lookup.protocol = protocol;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.lookup.query_timeout_ms = timeout;
        }
        if let Some(limit) = overrides.batch_concurrency {
            self.lookup.batch_concurrency = limit;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.lookup.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        if self.lookup.batch_concurrency == 0 || self.lookup.any_concurrency == 0 {
            return Err(ConfigError::Validation(
                "Concurrency limits must be greater than 0".to_string(),
            ));
        }

        if self.lookup.default_nameserver.trim().is_empty()
            || self.lookup.compare_nameserver.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "Default nameservers cannot be empty".to_string(),
            ));
        }

        for preset in &self.lookup.nameservers {
            if preset.address.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Nameserver preset '{}' has no address",
                    preset.name
                )));
            }
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG, SYSTEM_CONFIG]
            .into_iter()
            .find(|candidate| std::path::Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub protocol: Option<QueryProtocol>,
    pub query_timeout_ms: Option<u64>,
    pub batch_concurrency: Option<usize>,
    pub log_level: Option<String>,
}
