use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Malformed reply from {server}: {detail}")]
    MalformedReply { server: String, detail: String },

    #[error("Upstream timeout waiting on {server}")]
    UpstreamTimeout { server: String },

    #[error("Upstream I/O error on {server}: {detail}")]
    UpstreamIo { server: String, detail: String },

    #[error("Rule store read failed: {0}")]
    RuleStore(String),

    #[error("Failed to encode DNS reply: {0}")]
    ReplyEncoding(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
