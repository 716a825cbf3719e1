pub mod api;
pub mod config;
pub mod core;
pub mod export;
pub mod infrastructure;

pub use crate::core::models::{BalanceEntry, CalculationResult, SettlementEntry, Transaction};
pub use crate::core::{calculate, compute_balances, compute_settlements};
pub use crate::core::errors::ClearLedgerError;
pub use crate::core::services::LedgerService;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
