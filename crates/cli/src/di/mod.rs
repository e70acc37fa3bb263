use natdns_application::HandleQueryUseCase;
use natdns_domain::Config;
use natdns_infrastructure::dns::UdpForwarder;
use natdns_infrastructure::rules::JsonRuleStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const DNS_PORT: u16 = 53;

/// Wire the rule store, upstream forwarder and query pipeline together.
pub fn build_query_pipeline(config: &Config) -> Arc<HandleQueryUseCase> {
    let rule_store = Arc::new(JsonRuleStore::new(config.rules.path.clone()));
    let forwarder = Arc::new(UdpForwarder::new(Duration::from_millis(
        config.upstream.query_timeout,
    )));
    let fallback = SocketAddr::new(config.upstream.fallback_resolver, DNS_PORT);

    Arc::new(HandleQueryUseCase::new(rule_store, forwarder, fallback))
}
