use crate::core::aggregator::compute_balances;
use crate::core::matcher::compute_settlements;
use crate::core::models::Transaction;
use proptest::prelude::*;
use std::collections::HashMap;

const NAMES: [&str; 6] = ["Ana", "Ben", "Cai", "Dee", "Eli", "Fay"];

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (0..NAMES.len(), 0..NAMES.len(), 1u32..100_000u32)
        .prop_map(|(d, c, cents)| Transaction::new(NAMES[d], NAMES[c], f64::from(cents) / 100.0))
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..40)
}

proptest! {
    #[test]
    fn balances_conserve_money(transactions in transactions_strategy()) {
        let total: f64 = compute_balances(&transactions).iter().map(|b| b.final_balance).sum();
        prop_assert!(total.abs() < 1e-6, "sum of balances was {}", total);
    }

    #[test]
    fn every_participant_appears_once(transactions in transactions_strategy()) {
        let balances = compute_balances(&transactions);
        let mut seen = HashMap::new();
        for balance in &balances {
            prop_assert!(seen.insert(balance.name.clone(), ()).is_none());
        }
        for tx in &transactions {
            prop_assert!(seen.contains_key(&tx.debtor));
            prop_assert!(seen.contains_key(&tx.creditor));
        }
    }

    #[test]
    fn settlements_close_every_balance(transactions in transactions_strategy()) {
        let balances = compute_balances(&transactions);
        let settlements = compute_settlements(&balances);

        let mut remaining: HashMap<&str, f64> =
            balances.iter().map(|b| (b.name.as_str(), b.final_balance)).collect();
        for s in &settlements {
            prop_assert!(s.amount >= 0.0);
            *remaining.get_mut(s.from.as_str()).unwrap() += s.amount;
            *remaining.get_mut(s.to.as_str()).unwrap() -= s.amount;
        }

        // Each emitted amount carries at most half a cent of rounding.
        let tolerance = 0.005 * (settlements.len() as f64 + 1.0) + 1e-6;
        for (name, balance) in remaining {
            prop_assert!(balance.abs() <= tolerance, "{} left with {}", name, balance);
        }
    }

    #[test]
    fn settlement_count_is_bounded(transactions in transactions_strategy()) {
        let balances = compute_balances(&transactions);
        let nonzero = balances.iter().filter(|b| b.final_balance != 0.0).count();
        let settlements = compute_settlements(&balances);
        prop_assert!(settlements.len() <= nonzero.saturating_sub(1));
    }

    #[test]
    fn calculation_is_idempotent(transactions in transactions_strategy()) {
        let balances = compute_balances(&transactions);
        prop_assert_eq!(&balances, &compute_balances(&transactions));
        prop_assert_eq!(compute_settlements(&balances), compute_settlements(&balances));
    }
}
