use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One payment instruction produced by the matcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettlementEntry {
    pub from: String,
    pub to: String,
    #[schema(example = 42.5)]
    pub amount: f64,
}

impl SettlementEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        SettlementEntry {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResult {
    pub balances: Vec<super::balance::BalanceEntry>,
    pub settlements: Vec<SettlementEntry>,
}
