use dnsdiff_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

const DNS_PORT: u16 = 53;

/// Turns a nameserver string into a socket address.
///
/// Accepts `IP`, `IP:port`, `[IPv6]`, `[IPv6]:port`, and `hostname[:port]`.
/// Hostnames go through the system resolver and the first address wins.
pub async fn resolve_nameserver(
    nameserver: &str,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    let nameserver = nameserver.trim();
    if nameserver.is_empty() {
        return Err(DomainError::InvalidNameserver("empty nameserver".to_string()));
    }

    if let Some(addr) = parse_literal(nameserver) {
        return Ok(addr);
    }

    let (host, port) = split_host_port(nameserver)?;

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host((host, port)))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: nameserver.to_string(),
        })?
        .map_err(|e| DomainError::InvalidNameserver(format!("{}: {}", nameserver, e)))?;

    let addr = addrs.next().ok_or_else(|| {
        DomainError::InvalidNameserver(format!("{}: no addresses found", nameserver))
    })?;

    debug!(nameserver = %nameserver, resolved = %addr, "Nameserver hostname resolved");
    Ok(addr)
}

fn parse_literal(nameserver: &str) -> Option<SocketAddr> {
    if let Ok(ip) = nameserver.parse::<IpAddr>() {
        return Some(SocketAddr::new(ip, DNS_PORT));
    }
    if let Ok(addr) = nameserver.parse::<SocketAddr>() {
        return Some(addr);
    }
    nameserver
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|inner| inner.parse::<IpAddr>().ok())
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
}

fn split_host_port(nameserver: &str) -> Result<(&str, u16), DomainError> {
    let invalid = || DomainError::InvalidNameserver(nameserver.to_string());

    let (host, port) = match nameserver.rsplit_once(':') {
        Some((host, port)) => (host, port.parse::<u16>().map_err(|_| invalid())?),
        None => (nameserver, DNS_PORT),
    };

    let valid_host = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !valid_host {
        return Err(invalid());
    }

    Ok((host.trim_end_matches('.'), port))
}
