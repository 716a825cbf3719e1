use crate::core::models::{BalanceEntry, SettlementEntry};
use tracing::debug;

/// Rounds a monetary value to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pairs net debtors with net creditors greedily, in input order.
///
/// Each debtor walks the creditor list front to back, paying
/// `min(remaining debt, remaining credit)` to every creditor that still has
/// credit left, until its debt is exhausted. Only the emitted amount is
/// rounded; running totals keep full precision so rounding never compounds.
///
/// The result is deterministic and depends on input order. It is not a
/// minimum-transfer solution, but never emits more than
/// `debtors + creditors - 1` entries.
pub fn compute_settlements(balances: &[BalanceEntry]) -> Vec<SettlementEntry> {
    let debtors: Vec<(&str, f64)> = balances
        .iter()
        .filter(|b| b.final_balance < 0.0)
        .map(|b| (b.name.as_str(), b.final_balance.abs()))
        .collect();
    let mut creditors: Vec<(&str, f64)> = balances
        .iter()
        .filter(|b| b.final_balance > 0.0)
        .map(|b| (b.name.as_str(), b.final_balance))
        .collect();

    let mut settlements = Vec::new();

    for (debtor, mut debt) in debtors {
        for (creditor, credit) in creditors.iter_mut() {
            if debt <= 0.0 {
                break;
            }
            if *credit <= 0.0 {
                continue;
            }

            let pay = debt.min(*credit);
            settlements.push(SettlementEntry::new(debtor, *creditor, round_to_cents(pay)));

            debt -= pay;
            *credit -= pay;
        }
    }

    debug!("Matched {} settlements", settlements.len());
    settlements
}
