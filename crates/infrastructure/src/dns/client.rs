use super::forwarding::{MessageBuilder, ResponseParser};
use super::nameserver::resolve_nameserver;
use super::transport::{create_transport, tcp::TcpTransport, udp, DnsTransport};
use async_trait::async_trait;
use dnsdiff_application::ports::DnsClient;
use dnsdiff_domain::{DomainError, LookupConfig, QueryProtocol, RawRecord};
use std::time::Duration;
use tracing::{debug, warn};

/// DNS client speaking the wire protocol directly to the chosen nameserver.
pub struct HickoryDnsClient {
    protocol: QueryProtocol,
    timeout: Duration,
    udp_recv_buffer: usize,
}

impl HickoryDnsClient {
    pub fn new(protocol: QueryProtocol, timeout: Duration) -> Self {
        Self {
            protocol,
            timeout,
            udp_recv_buffer: udp::DEFAULT_RECV_BUFFER,
        }
    }

    pub fn with_udp_recv_buffer(mut self, size: usize) -> Self {
        self.udp_recv_buffer = size;
        self
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(
            config.protocol,
            Duration::from_millis(config.query_timeout_ms),
        )
        .with_udp_recv_buffer(config.udp_recv_buffer)
    }
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn query(
        &self,
        nameserver: &str,
        domain: &str,
        type_code: u16,
    ) -> Result<Vec<RawRecord>, DomainError> {
        let server_addr = resolve_nameserver(nameserver, self.timeout).await?;
        let (query_id, query_bytes) = MessageBuilder::build_query(domain, type_code)?;

        let transport = create_transport(self.protocol, server_addr, self.udp_recv_buffer);
        let response = transport.send(&query_bytes, self.timeout).await?;
        let mut parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.truncated && response.protocol_used == "UDP" {
            debug!(
                server = %server_addr,
                domain = %domain,
                "Truncated UDP response, retrying over TCP"
            );
            let tcp = TcpTransport::new(server_addr);
            let retry = tcp.send(&query_bytes, self.timeout).await?;
            parsed = ResponseParser::parse(&retry.bytes)?;
        }

        if parsed.id != query_id {
            warn!(
                server = %server_addr,
                expected = query_id,
                received = parsed.id,
                "DNS response ID mismatch"
            );
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, query_id
            )));
        }

        debug!(
            server = %server_addr,
            domain = %domain,
            type_code = type_code,
            protocol = transport.protocol_name(),
            answers = parsed.answers.len(),
            "DNS query completed"
        );

        parsed.into_records(nameserver, domain)
    }
}
