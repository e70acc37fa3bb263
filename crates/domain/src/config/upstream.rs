use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Resolver used when no matching zone defines an override.
    #[serde(default = "default_fallback_resolver")]
    pub fallback_resolver: IpAddr,

    /// Upstream query timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            fallback_resolver: default_fallback_resolver(),
            query_timeout: default_query_timeout(),
        }
    }
}

fn default_fallback_resolver() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1))
}

fn default_query_timeout() -> u64 {
    5000
}
