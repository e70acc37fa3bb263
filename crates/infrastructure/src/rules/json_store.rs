use async_trait::async_trait;
use natdns_application::ports::RuleStore;
use natdns_domain::{DomainError, RuleTable};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// File-backed rule store.
///
/// The JSON file is re-read on every `load()`, so edits made by the
/// configuration tooling take effect on the next query with no restart and
/// no invalidation protocol. A missing file is the normal first-run state
/// and yields an empty table; anything else that goes wrong is a typed
/// rule-store error.
pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RuleStore for JsonRuleStore {
    async fn load(&self) -> Result<RuleTable, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Rule file absent, using empty rule table");
                return Ok(RuleTable::default());
            }
            Err(e) => {
                return Err(DomainError::RuleStore(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            DomainError::RuleStore(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }
}
