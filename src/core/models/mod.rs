pub mod balance;
pub mod session;
pub mod settlement;
pub mod transaction;

pub use balance::BalanceEntry;
pub use session::Session;
pub use settlement::{CalculationResult, SettlementEntry};
pub use transaction::Transaction;
