use async_trait::async_trait;
use natdns_domain::{DomainError, RuleTable};

/// Read access to the persisted NAT rule table.
///
/// Every call returns a fresh snapshot so configuration edits take effect
/// on the next query. A missing backing store is not an error and yields an
/// empty table; unreadable or corrupt persistence is reported as
/// `DomainError::RuleStore` and the caller decides how to degrade.
#[async_trait]
pub trait RuleStore: Send + Sync {
    async fn load(&self) -> Result<RuleTable, DomainError>;
}
