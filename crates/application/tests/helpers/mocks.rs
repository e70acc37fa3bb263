#![allow(dead_code)]

use async_trait::async_trait;
use natdns_application::ports::{QueryForwarder, RuleStore};
use natdns_domain::{DomainError, RuleTable};
use std::net::SocketAddr;
use std::sync::Mutex;

pub struct MockRuleStore {
    table: RuleTable,
    fail: bool,
}

impl MockRuleStore {
    pub fn empty() -> Self {
        Self {
            table: RuleTable::default(),
            fail: false,
        }
    }

    pub fn with_table(table: RuleTable) -> Self {
        Self { table, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            table: RuleTable::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl RuleStore for MockRuleStore {
    async fn load(&self) -> Result<RuleTable, DomainError> {
        if self.fail {
            return Err(DomainError::RuleStore("mock store failure".to_string()));
        }
        Ok(self.table.clone())
    }
}

#[derive(Default)]
pub struct MockForwarder {
    reply: Mutex<Option<Vec<u8>>>,
    error: Mutex<Option<DomainError>>,
    seen: Mutex<Vec<(Vec<u8>, SocketAddr)>>,
}

impl MockForwarder {
    pub fn returning(reply: Vec<u8>) -> Self {
        Self {
            reply: Mutex::new(Some(reply)),
            ..Self::default()
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            error: Mutex::new(Some(error)),
            ..Self::default()
        }
    }

    /// Queries seen so far, as (raw bytes, resolver address) pairs.
    pub fn seen(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryForwarder for MockForwarder {
    async fn forward(
        &self,
        query_bytes: &[u8],
        resolver: SocketAddr,
    ) -> Result<Vec<u8>, DomainError> {
        self.seen
            .lock()
            .unwrap()
            .push((query_bytes.to_vec(), resolver));
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        Ok(self.reply.lock().unwrap().clone().unwrap_or_default())
    }
}
