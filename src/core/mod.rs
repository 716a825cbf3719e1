pub mod aggregator;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod services;

pub use aggregator::compute_balances;
pub use matcher::compute_settlements;

use models::{CalculationResult, Transaction};

/// Runs the aggregator and the matcher over one transaction list.
pub fn calculate(transactions: &[Transaction]) -> CalculationResult {
    let balances = compute_balances(transactions);
    let settlements = compute_settlements(&balances);
    CalculationResult { balances, settlements }
}
