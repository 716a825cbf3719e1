mod aggregator_tests;
mod property_tests;
mod session_tests;

use crate::core::models::Transaction;
use crate::core::services::LedgerService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> LedgerService<InMemoryStorage> {
    LedgerService::new(InMemoryStorage::new())
}

pub fn tx(debtor: &str, creditor: &str, amount: f64) -> Transaction {
    Transaction::new(debtor, creditor, amount)
}
