use crate::core::calculate;
use crate::core::errors::ClearLedgerError;
use crate::core::models::{CalculationResult, Session, Transaction};
use crate::infrastructure::storage::SessionStorage;
use chrono::{TimeDelta, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

const MAX_NAME_LENGTH: usize = 100;

/// Bounds on what the session store may hold.
#[derive(Clone, Debug)]
pub struct SessionLimits {
    /// Sessions untouched for this long are evicted.
    pub idle_ttl: Duration,
    pub max_sessions: usize,
    pub max_transactions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        SessionLimits {
            idle_ttl: Duration::from_secs(60 * 60),
            max_sessions: 10_000,
            max_transactions: 1_000,
        }
    }
}

pub struct LedgerService<S: SessionStorage> {
    storage: S,
    limits: SessionLimits,
}

impl<S: SessionStorage> LedgerService<S> {
    pub fn new(storage: S) -> Self {
        Self::with_limits(storage, SessionLimits::default())
    }

    pub fn with_limits(storage: S, limits: SessionLimits) -> Self {
        LedgerService { storage, limits }
    }

    /// Stateless calculation over a caller-supplied transaction list.
    pub fn calculate(&self, transactions: &[Transaction]) -> CalculationResult {
        let result = calculate(transactions);
        debug!(
            "Calculated {} balances and {} settlements",
            result.balances.len(),
            result.settlements.len()
        );
        result
    }

    pub async fn create_session(&self) -> Result<Session, ClearLedgerError> {
        self.evict_idle_sessions().await?;

        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.storage.save_session(session.clone(), self.limits.max_sessions).await?;
        info!("Created session {}", session.id);
        Ok(session)
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Session, ClearLedgerError> {
        self.storage
            .get_session(session_id)
            .await?
            .ok_or_else(|| ClearLedgerError::SessionNotFound(session_id.to_string()))
    }

    /// Appends a form-entered transaction to a session.
    ///
    /// Both names must be non-blank and the amount strictly positive. A
    /// session already holding `max_transactions` entries refuses the add.
    pub async fn add_transaction(
        &self,
        session_id: &str,
        debtor: &str,
        creditor: &str,
        amount: f64,
    ) -> Result<Session, ClearLedgerError> {
        self.validate_string_input("debtor", debtor, MAX_NAME_LENGTH)?;
        self.validate_string_input("creditor", creditor, MAX_NAME_LENGTH)?;
        self.validate_amount_input("amount", amount)?;

        let transaction = Transaction::new(debtor.trim(), creditor.trim(), amount);
        let session = self
            .storage
            .append_transaction(session_id, transaction, self.limits.max_transactions)
            .await?;
        info!(
            "Session {}: {} owes {} {}",
            session_id,
            debtor.trim(),
            creditor.trim(),
            amount
        );
        Ok(session)
    }

    pub async fn reset_session(&self, session_id: &str) -> Result<Session, ClearLedgerError> {
        let session = self.storage.clear_transactions(session_id).await?;
        info!("Session {} reset", session_id);
        Ok(session)
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), ClearLedgerError> {
        self.storage.delete_session(session_id).await?;
        info!("Session {} deleted", session_id);
        Ok(())
    }

    pub async fn calculate_session(&self, session_id: &str) -> Result<CalculationResult, ClearLedgerError> {
        let session = self.get_session(session_id).await?;
        Ok(self.calculate(&session.transactions))
    }

    /// Removes sessions idle for longer than the configured TTL.
    pub async fn evict_idle_sessions(&self) -> Result<usize, ClearLedgerError> {
        let Ok(ttl) = TimeDelta::from_std(self.limits.idle_ttl) else {
            return Ok(0);
        };
        let Some(idle_before) = Utc::now().checked_sub_signed(ttl) else {
            return Ok(0);
        };

        let evicted = self.storage.evict_idle(idle_before).await?;
        if evicted > 0 {
            info!("Evicted {} idle sessions", evicted);
        }
        Ok(evicted)
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), ClearLedgerError> {
        if value.trim().is_empty() {
            warn!("Rejected empty {}", field);
            return Err(ClearLedgerError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(ClearLedgerError::invalid_input(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(ClearLedgerError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), ClearLedgerError> {
        if !amount.is_finite() {
            return Err(ClearLedgerError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be a finite number",
            ));
        }
        if amount <= 0.0 {
            warn!("Rejected non-positive amount {}", amount);
            return Err(ClearLedgerError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl<S: SessionStorage + 'static> LedgerService<S> {
    /// Spawns a task that sweeps idle sessions every `every`.
    pub fn start_eviction_task(self: Arc<Self>, every: Duration) {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                if let Err(e) = self.evict_idle_sessions().await {
                    warn!("Session sweep failed: {}", e);
                }
            }
        });
    }
}
