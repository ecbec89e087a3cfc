//! UDP transport (RFC 1035 §4.2.1).
//!
//! One datagram out, then read until a reply arrives from the nameserver
//! carrying the query's ID. Anything else landing on the ephemeral port is
//! dropped and the read continues until the deadline. A reply with the TC
//! bit set is left for the caller to retry over TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use dnsdiff_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, warn};

/// Receive buffer for servers answering with EDNS(0) payloads.
pub const DEFAULT_RECV_BUFFER: usize = 4096;

/// Plain DNS over UDP never exceeds this without EDNS(0).
const MIN_RECV_BUFFER: usize = 512;

pub struct UdpTransport {
    server_addr: SocketAddr,
    recv_buffer: usize,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            recv_buffer: DEFAULT_RECV_BUFFER,
        }
    }

    pub fn with_recv_buffer(mut self, size: usize) -> Self {
        self.recv_buffer = size.max(MIN_RECV_BUFFER);
        self
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }

    /// A datagram is the reply only if it comes from the nameserver and echoes the query ID.
    fn is_reply(&self, from: SocketAddr, datagram: &[u8], query_id: Option<[u8; 2]>) -> bool {
        if from != self.server_addr {
            warn!(
                expected = %self.server_addr,
                received_from = %from,
                "Dropping UDP datagram from unexpected source"
            );
            return false;
        }
        match query_id {
            Some(id) if datagram.get(..2) != Some(&id[..]) => {
                debug!(
                    server = %self.server_addr,
                    len = datagram.len(),
                    "Dropping UDP datagram with stale or foreign ID"
                );
                false
            }
            _ => true,
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await.map_err(|e| {
            DomainError::UpstreamQuery(format!("Failed to bind UDP socket: {}", e))
        })?;

        let bytes_sent = timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
            .await
            .map_err(|_| self.timed_out())?
            .map_err(|e| {
                DomainError::UpstreamQuery(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let query_id = message_bytes.get(..2).map(|id| [id[0], id[1]]);
        let mut recv_buf = vec![0u8; self.recv_buffer];

        loop {
            let (len, from) = timeout_at(deadline, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timed_out())?
                .map_err(|e| {
                    DomainError::UpstreamQuery(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

            if !self.is_reply(from, &recv_buf[..len], query_id) {
                continue;
            }

            recv_buf.truncate(len);
            debug!(server = %self.server_addr, bytes_received = len, "UDP response received");

            return Ok(TransportResponse {
                bytes: Bytes::from(recv_buf),
                protocol_used: "UDP",
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
