mod query_forwarder;
mod rule_store;

pub use query_forwarder::QueryForwarder;
pub use rule_store::RuleStore;
