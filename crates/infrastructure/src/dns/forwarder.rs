//! UDP upstream forwarder (RFC 1035 §4.2.1)
//!
//! One ephemeral socket per exchange: send the client's query bytes as-is,
//! wait for a single reply within the configured timeout. No retry, no
//! truncation fallback.

use async_trait::async_trait;
use natdns_application::ports::QueryForwarder;
use natdns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum upstream reply size we accept.
const MAX_UPSTREAM_REPLY_SIZE: usize = 4096;

pub struct UdpForwarder {
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl QueryForwarder for UdpForwarder {
    async fn forward(
        &self,
        query_bytes: &[u8],
        resolver: SocketAddr,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if resolver.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::UpstreamIo {
                server: resolver.to_string(),
                detail: format!("failed to bind UDP socket: {e}"),
            })?;

        socket
            .connect(resolver)
            .await
            .map_err(|e| DomainError::UpstreamIo {
                server: resolver.to_string(),
                detail: format!("failed to connect: {e}"),
            })?;

        socket
            .send(query_bytes)
            .await
            .map_err(|e| DomainError::UpstreamIo {
                server: resolver.to_string(),
                detail: format!("failed to send query: {e}"),
            })?;

        debug!(server = %resolver, bytes_sent = query_bytes.len(), "UDP query forwarded");

        let mut recv_buf = vec![0u8; MAX_UPSTREAM_REPLY_SIZE];
        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::UpstreamTimeout {
                server: resolver.to_string(),
            })?
            .map_err(|e| DomainError::UpstreamIo {
                server: resolver.to_string(),
                detail: format!("failed to receive reply: {e}"),
            })?;

        recv_buf.truncate(bytes_received);

        debug!(server = %resolver, bytes_received, "UDP reply received");

        Ok(recv_buf)
    }
}
