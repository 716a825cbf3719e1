use crate::core::errors::ClearLedgerError;
use crate::core::models::{Session, Transaction};
use crate::infrastructure::storage::SessionStorage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStorage for InMemoryStorage {
    async fn save_session(&self, session: Session, max_sessions: usize) -> Result<(), ClearLedgerError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) && sessions.len() >= max_sessions {
            return Err(ClearLedgerError::invalid_input(
                "session",
                "Too Many Sessions",
                format!("No more than {} sessions can be open at once", max_sessions),
            ));
        }
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get_session(&self, session_id: &str) -> Result<Option<Session>, ClearLedgerError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn append_transaction(
        &self,
        session_id: &str,
        transaction: Transaction,
        max_transactions: usize,
    ) -> Result<Session, ClearLedgerError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| ClearLedgerError::SessionNotFound(session_id.to_string()))?;
        if session.transactions.len() >= max_transactions {
            return Err(ClearLedgerError::invalid_input(
                "transactions",
                "Session Full",
                format!("A session cannot hold more than {} transactions", max_transactions),
            ));
        }
        session.transactions.push(transaction);
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    async fn clear_transactions(&self, session_id: &str) -> Result<Session, ClearLedgerError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| ClearLedgerError::SessionNotFound(session_id.to_string()))?;
        session.transactions.clear();
        session.updated_at = Utc::now();
        Ok(session.clone())
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ClearLedgerError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(session_id)
            .map(|_| ())
            .ok_or_else(|| ClearLedgerError::SessionNotFound(session_id.to_string()))
    }

    async fn evict_idle(&self, idle_before: DateTime<Utc>) -> Result<usize, ClearLedgerError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at > idle_before);
        Ok(before - sessions.len())
    }
}
