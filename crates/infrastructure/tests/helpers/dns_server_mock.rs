#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// One answer record, encoded straight to wire format.
#[derive(Clone)]
pub struct MockRecord {
    type_code: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

impl MockRecord {
    pub fn a(ip: Ipv4Addr, ttl: u32) -> Self {
        Self {
            type_code: 1,
            ttl,
            rdata: ip.octets().to_vec(),
        }
    }

    pub fn mx(preference: u16, exchange: &str, ttl: u32) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend(encode_name(exchange));
        Self {
            type_code: 15,
            ttl,
            rdata,
        }
    }

    pub fn txt(segments: &[&str], ttl: u32) -> Self {
        let mut rdata = Vec::new();
        for segment in segments {
            rdata.push(segment.len() as u8);
            rdata.extend_from_slice(segment.as_bytes());
        }
        Self {
            type_code: 16,
            ttl,
            rdata,
        }
    }

    pub fn ns(target: &str, ttl: u32) -> Self {
        Self {
            type_code: 2,
            ttl,
            rdata: encode_name(target),
        }
    }
}

#[derive(Clone, Default)]
struct MockAnswer {
    rcode: u8,
    records: Vec<MockRecord>,
}

#[derive(Default)]
pub struct MockDnsServerBuilder {
    zone: HashMap<(String, u16), MockAnswer>,
    truncate_udp: bool,
}

impl MockDnsServerBuilder {
    pub fn answer(mut self, name: &str, type_code: u16, records: Vec<MockRecord>) -> Self {
        self.zone.insert(
            (name.to_ascii_lowercase(), type_code),
            MockAnswer { rcode: 0, records },
        );
        self
    }

    pub fn rcode(mut self, name: &str, type_code: u16, rcode: u8) -> Self {
        self.zone.insert(
            (name.to_ascii_lowercase(), type_code),
            MockAnswer {
                rcode,
                records: Vec::new(),
            },
        );
        self
    }

    /// UDP replies carry the TC bit and no answers; TCP replies are complete.
    pub fn truncate_udp(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    pub async fn start(self) -> Result<MockDnsServer, std::io::Error> {
        let (udp, tcp) = bind_pair().await?;
        let addr = udp.local_addr()?;
        let zone = Arc::new(self.zone);
        let truncate_udp = self.truncate_udp;
        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_counter = udp_queries.clone();
        let tcp_counter = tcp_queries.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_response(&buf[..len], &zone, truncate_udp) {
                                let _ = udp.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = tcp.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            let zone = zone.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = build_response(&query, &zone, false) {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(MockDnsServer {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

/// UDP and TCP mock DNS server on one loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub fn builder() -> MockDnsServerBuilder {
        MockDnsServerBuilder::default()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Nameserver string in the form the client accepts.
    pub fn nameserver(&self) -> String {
        self.addr.to_string()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn bind_pair() -> Result<(UdpSocket, TcpListener), std::io::Error> {
    let mut last_err = None;
    for _ in 0..10 {
        let udp = UdpSocket::bind("127.0.0.1:0").await?;
        let port = udp.local_addr()?.port();
        match TcpListener::bind(("127.0.0.1", port)).await {
            Ok(tcp) => return Ok((udp, tcp)),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| std::io::Error::other("no free port")))
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Returns the lowercase QNAME, QTYPE and the end offset of the question.
fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
    let mut pos = 12;
    let mut labels = Vec::new();
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8_lossy(query.get(pos..pos + len)?).to_ascii_lowercase());
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((labels.join("."), qtype, pos + 4))
}

fn build_response(
    query: &[u8],
    zone: &HashMap<(String, u16), MockAnswer>,
    truncate: bool,
) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    let (qname, qtype, question_end) = parse_question(query)?;
    let answer = zone.get(&(qname, qtype)).cloned().unwrap_or_default();
    let records = if truncate { Vec::new() } else { answer.records };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.push(if truncate { 0x83 } else { 0x81 });
    response.push(0x80 | (answer.rcode & 0x0f));
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(query.get(12..question_end)?);

    for record in &records {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&record.type_code.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&record.ttl.to_be_bytes());
        response.extend_from_slice(&(record.rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&record.rdata);
    }

    Some(response)
}
