//! natdns Domain Layer
pub mod config;
pub mod errors;
pub mod rules;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use rules::{RuleTable, SubnetMapping, ZoneRule};
