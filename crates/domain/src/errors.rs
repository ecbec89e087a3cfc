use thiserror::Error;

/// Outcome of a query that carries no records but is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeAnswer {
    NxDomain,
    NoData,
    ServFail,
}

impl NegativeAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            NegativeAnswer::NxDomain => "NXDOMAIN",
            NegativeAnswer::NoData => "NODATA",
            NegativeAnswer::ServFail => "SERVFAIL",
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Invalid request URL")]
    InvalidRequestUrl,

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Please enter at least one domain")]
    NoDomains,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid nameserver: {0}")]
    InvalidNameserver(String),

    #[error("Invalid export format: {0}")]
    InvalidExportFormat(String),

    #[error("Negative answer: {}", .0.as_str())]
    NegativeAnswer(NegativeAnswer),

    #[error("{0}")]
    UpstreamQuery(String),

    #[error("Transport timeout querying {server}")]
    TransportTimeout { server: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// NXDOMAIN, NODATA and SERVFAIL contribute zero records instead of failing.
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, DomainError::NegativeAnswer(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::MissingParameters
                | DomainError::InvalidRequestUrl
                | DomainError::InvalidRequestBody(_)
                | DomainError::NoDomains
                | DomainError::InvalidDomainName(_)
                | DomainError::InvalidRecordType(_)
                | DomainError::InvalidExportFormat(_)
        )
    }
}
