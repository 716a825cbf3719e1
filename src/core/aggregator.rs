use crate::core::models::{BalanceEntry, Transaction};
use std::collections::HashMap;
use tracing::debug;

/// Folds a transaction list into one net balance per participant.
///
/// Participants appear in order of first mention, scanning transactions in
/// input order and the debtor before the creditor of each transaction.
/// Amounts are taken as given: a negative amount reverses the direction and a
/// self-transaction nets to zero for that participant.
pub fn compute_balances(transactions: &[Transaction]) -> Vec<BalanceEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut balances: Vec<BalanceEntry> = Vec::new();

    for tx in transactions {
        let debtor = slot(&mut positions, &mut balances, &tx.debtor);
        let creditor = slot(&mut positions, &mut balances, &tx.creditor);
        balances[debtor].final_balance -= tx.amount;
        balances[creditor].final_balance += tx.amount;
    }

    debug!(
        "Computed {} balances from {} transactions",
        balances.len(),
        transactions.len()
    );
    balances
}

fn slot<'a>(positions: &mut HashMap<&'a str, usize>, balances: &mut Vec<BalanceEntry>, name: &'a str) -> usize {
    *positions.entry(name).or_insert_with(|| {
        balances.push(BalanceEntry::new(name, 0.0));
        balances.len() - 1
    })
}
