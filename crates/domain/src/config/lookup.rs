use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport used for outbound queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryProtocol {
    #[default]
    Tcp,
    Udp,
}

impl fmt::Display for QueryProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryProtocol::Tcp => write!(f, "tcp"),
            QueryProtocol::Udp => write!(f, "udp"),
        }
    }
}

impl FromStr for QueryProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(QueryProtocol::Tcp),
            "udp" => Ok(QueryProtocol::Udp),
            other => Err(format!("unknown protocol '{}', expected tcp or udp", other)),
        }
    }
}

/// A selectable nameserver. `address` is an IP, `IP:port`, or a hostname.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NameserverPreset {
    pub name: String,
    pub address: String,
}

impl NameserverPreset {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Hostname presets are resolved before use in the nameserver list.
    pub fn is_hostname(&self) -> bool {
        self.address.parse::<std::net::IpAddr>().is_err()
            && self.address.parse::<std::net::SocketAddr>().is_err()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub protocol: QueryProtocol,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Largest UDP reply accepted, in bytes. Bigger answers need TCP.
    #[serde(default = "default_udp_recv_buffer")]
    pub udp_recv_buffer: usize,

    /// Units in flight for one batch.
    #[serde(default = "default_concurrency")]
    pub batch_concurrency: usize,

    /// Per-type queries in flight for one ANY lookup.
    #[serde(default = "default_concurrency")]
    pub any_concurrency: usize,

    #[serde(default = "default_nameserver")]
    pub default_nameserver: String,

    #[serde(default = "default_compare_nameserver")]
    pub compare_nameserver: String,

    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<NameserverPreset>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            protocol: QueryProtocol::default(),
            query_timeout_ms: default_query_timeout_ms(),
            udp_recv_buffer: default_udp_recv_buffer(),
            batch_concurrency: default_concurrency(),
            any_concurrency: default_concurrency(),
            default_nameserver: default_nameserver(),
            compare_nameserver: default_compare_nameserver(),
            nameservers: default_nameservers(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_udp_recv_buffer() -> usize {
    4096
}

fn default_concurrency() -> usize {
    8
}

fn default_nameserver() -> String {
    "8.8.8.8".to_string()
}

fn default_compare_nameserver() -> String {
    "162.159.8.185".to_string()
}

fn default_nameservers() -> Vec<NameserverPreset> {
    [
        ("ns1.markmonitor.com", "ns1.markmonitor.com"),
        ("ns47.domaincontrol.com", "ns47.domaincontrol.com"),
        ("ns-cloud-c1.googledomains.com", "ns-cloud-c1.googledomains.com"),
        ("ns-cloud-d1.googledomains.com", "ns-cloud-d1.googledomains.com"),
        ("ns-cloud-e1.googledomains.com", "ns-cloud-e1.googledomains.com"),
        ("ns48.domaincontrol.com", "ns48.domaincontrol.com"),
        ("ns-cloud-c2.googledomains.com", "ns-cloud-c2.googledomains.com"),
        ("ns-cloud-c3.googledomains.com", "ns-cloud-c3.googledomains.com"),
        ("ns-cloud-c4.googledomains.com", "ns-cloud-c4.googledomains.com"),
        ("ns-cloud-d2.googledomains.com", "ns-cloud-d2.googledomains.com"),
        ("ns-cloud-d3.googledomains.com", "ns-cloud-d3.googledomains.com"),
        ("ns-cloud-d4.googledomains.com", "ns-cloud-d4.googledomains.com"),
        ("Google", "8.8.8.8"),
        ("Cloudflare", "1.1.1.1"),
        ("OpenDNS", "208.67.222.222"),
        ("Quad9", "9.9.9.9"),
        ("Verisign", "64.6.64.6"),
        ("Comodo Secure DNS", "8.26.56.26"),
        ("AdGuard DNS", "94.140.14.14"),
        ("CleanBrowsing", "185.228.168.9"),
        ("ns2.markmonitor.com", "162.159.9.229"),
        ("ns3.markmonitor.com", "162.159.10.22"),
        ("ns4.markmonitor.com", "162.159.11.100"),
        ("ns5.markmonitor.com", "162.159.12.75"),
        ("ns6.markmonitor.com", "162.159.13.131"),
        ("ns7.markmonitor.com", "162.159.14.2"),
        ("ns-440.awsdns-55.com", "ns-440.awsdns-55.com"),
        ("ns-2048.awsdns-64.com", "ns-2048.awsdns-64.com"),
        ("ns-2049.awsdns-65.net", "ns-2049.awsdns-65.net"),
    ]
    .into_iter()
    .map(|(name, address)| NameserverPreset::new(name, address))
    .collect()
}
