pub mod upstream_mock;
pub mod wire;

pub use upstream_mock::MockUpstream;
pub use wire::query_bytes;
