use crate::core::errors::ClearLedgerError;
use crate::core::models::{Session, Transaction};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Inserts or replaces a session. A new id is refused once `max_sessions` are live.
    async fn save_session(&self, session: Session, max_sessions: usize) -> Result<(), ClearLedgerError>;
    async fn get_session(&self, session_id: &str) -> Result<Option<Session>, ClearLedgerError>;
    async fn append_transaction(
        &self,
        session_id: &str,
        transaction: Transaction,
        max_transactions: usize,
    ) -> Result<Session, ClearLedgerError>;
    async fn clear_transactions(&self, session_id: &str) -> Result<Session, ClearLedgerError>;
    async fn delete_session(&self, session_id: &str) -> Result<(), ClearLedgerError>;
    /// Drops every session last touched at or before `idle_before`, returning how many went.
    async fn evict_idle(&self, idle_before: DateTime<Utc>) -> Result<usize, ClearLedgerError>;
}

pub mod in_memory;
