use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single obligation: `debtor` owes `creditor` the given `amount`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub debtor: String,
    pub creditor: String,
    #[schema(example = 100.0)]
    pub amount: f64,
}

impl Transaction {
    pub fn new(debtor: impl Into<String>, creditor: impl Into<String>, amount: f64) -> Self {
        Transaction {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
        }
    }
}
