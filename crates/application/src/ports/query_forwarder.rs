use async_trait::async_trait;
use natdns_domain::DomainError;
use std::net::SocketAddr;

/// One UDP exchange with an upstream resolver.
///
/// The query bytes are relayed exactly as received from the client; the
/// implementation performs a single send/receive with its configured
/// timeout and no retry.
#[async_trait]
pub trait QueryForwarder: Send + Sync {
    async fn forward(
        &self,
        query_bytes: &[u8],
        resolver: SocketAddr,
    ) -> Result<Vec<u8>, DomainError>;
}
