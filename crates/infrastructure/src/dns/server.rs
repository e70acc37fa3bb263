use natdns_application::HandleQueryUseCase;
use natdns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Datagram-level server handler.
///
/// Runs the query pipeline for one inbound datagram. Failures follow the
/// drop policy: log per error class and send nothing back, leaving the
/// client to time out. The caller stays in its receive loop regardless.
pub struct DnsServerHandler {
    use_case: Arc<HandleQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        match self.use_case.execute(datagram).await {
            Ok(reply) => {
                debug!(client = %client, bytes = reply.len(), "Sending reply");
                Some(reply)
            }
            Err(e @ DomainError::MalformedQuery(_)) => {
                warn!(client = %client, error = %e, "Dropping malformed query");
                None
            }
            Err(
                e @ (DomainError::UpstreamTimeout { .. }
                | DomainError::UpstreamIo { .. }
                | DomainError::MalformedReply { .. }),
            ) => {
                warn!(client = %client, error = %e, "Upstream exchange failed, dropping query");
                None
            }
            Err(e) => {
                error!(client = %client, error = %e, "Query handling failed, dropping query");
                None
            }
        }
    }
}
