use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Net position of one participant after folding every transaction.
///
/// Negative means the participant owes money, positive means they are owed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceEntry {
    pub name: String,
    #[serde(rename = "finalBalance")]
    pub final_balance: f64,
}

impl BalanceEntry {
    pub fn new(name: impl Into<String>, final_balance: f64) -> Self {
        BalanceEntry {
            name: name.into(),
            final_balance,
        }
    }
}
