pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnsdiff_domain::{DomainError, QueryProtocol};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: bytes::Bytes,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }
}

pub fn create_transport(
    protocol: QueryProtocol,
    server_addr: SocketAddr,
    udp_recv_buffer: usize,
) -> Transport {
    match protocol {
        QueryProtocol::Udp => Transport::Udp(
            udp::UdpTransport::new(server_addr).with_recv_buffer(udp_recv_buffer),
        ),
        QueryProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}
