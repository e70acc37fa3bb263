use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleStoreConfig {
    /// Path of the JSON NAT rule file. Re-read on every request, so edits
    /// take effect on the next query without a restart.
    #[serde(default = "default_rules_path")]
    pub path: String,
}

impl Default for RuleStoreConfig {
    fn default() -> Self {
        Self {
            path: default_rules_path(),
        }
    }
}

fn default_rules_path() -> String {
    "dns_nat_table.json".to_string()
}
