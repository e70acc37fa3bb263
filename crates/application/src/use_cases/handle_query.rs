use crate::ports::{QueryForwarder, RuleStore};
use crate::rewrite::rewrite_answers;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use natdns_domain::{DomainError, RuleTable};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Zone resolver overrides are plain addresses; upstream queries go to the
/// standard DNS port.
const DNS_PORT: u16 = 53;

/// Per-request pipeline: parse → zone/resolver lookup → forward → rewrite.
///
/// The inbound datagram is forwarded upstream byte-for-byte; parsing only
/// extracts the question name and lets the reply be rewritten. The rule
/// snapshot is loaded fresh per request, so edits to the store are visible
/// on the very next query.
pub struct HandleQueryUseCase {
    rule_store: Arc<dyn RuleStore>,
    forwarder: Arc<dyn QueryForwarder>,
    fallback_resolver: SocketAddr,
}

impl HandleQueryUseCase {
    pub fn new(
        rule_store: Arc<dyn RuleStore>,
        forwarder: Arc<dyn QueryForwarder>,
        fallback_resolver: SocketAddr,
    ) -> Self {
        Self {
            rule_store,
            forwarder,
            fallback_resolver,
        }
    }

    pub async fn execute(&self, raw_query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let query = Message::from_vec(raw_query)
            .map_err(|e| DomainError::MalformedQuery(e.to_string()))?;
        let question = query
            .queries()
            .first()
            .ok_or_else(|| DomainError::MalformedQuery("empty question section".to_string()))?;
        let domain = normalize_domain(&question.name().to_utf8());

        // A failing store degrades to an empty table: the query is still
        // forwarded to the fallback resolver with no rewriting.
        let rules = match self.rule_store.load().await {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %e, "Rule store unavailable, continuing with empty rule table");
                RuleTable::default()
            }
        };

        let resolver = rules
            .resolver_for(&domain)
            .map(|ip| SocketAddr::new(ip, DNS_PORT))
            .unwrap_or(self.fallback_resolver);
        debug!(domain = %domain, resolver = %resolver, "Forwarding query upstream");

        let reply_bytes = self.forwarder.forward(raw_query, resolver).await?;

        let mut reply = Message::from_vec(&reply_bytes).map_err(|e| DomainError::MalformedReply {
            server: resolver.to_string(),
            detail: e.to_string(),
        })?;

        let rewritten = rewrite_answers(&mut reply, &domain, &rules);
        if rewritten > 0 {
            debug!(domain = %domain, rewritten, "Rewrote answer addresses");
            encode_message(&reply)
        } else {
            // Nothing changed; relay the upstream reply as-is.
            Ok(reply_bytes)
        }
    }
}

fn normalize_domain(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

fn encode_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::ReplyEncoding(e.to_string()))?;
    Ok(buf)
}
