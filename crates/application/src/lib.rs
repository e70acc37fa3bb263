//! natdns Application Layer
//!
//! Ports (traits) the infrastructure adapters implement, the answer
//! rewriter, and the per-request query pipeline.
pub mod ports;
pub mod rewrite;
pub mod use_cases;

pub use use_cases::HandleQueryUseCase;
