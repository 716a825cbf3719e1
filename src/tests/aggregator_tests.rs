use crate::core::aggregator::compute_balances;
use crate::core::models::BalanceEntry;
use crate::tests::tx;

#[test]
fn test_empty_transactions_yield_no_balances() {
    assert!(compute_balances(&[]).is_empty());
}

#[test]
fn test_single_transaction() {
    let balances = compute_balances(&[tx("A", "B", 100.0)]);
    assert_eq!(
        balances,
        vec![BalanceEntry::new("A", -100.0), BalanceEntry::new("B", 100.0)]
    );
}

#[test]
fn test_participants_ordered_by_first_appearance() {
    let balances = compute_balances(&[tx("C", "A", 10.0), tx("B", "C", 5.0), tx("A", "D", 1.0)]);
    let names: Vec<&str> = balances.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B", "D"]);
}

#[test]
fn test_pass_through_participant_nets_to_zero() {
    let balances = compute_balances(&[tx("A", "B", 100.0), tx("B", "C", 100.0)]);
    assert_eq!(
        balances,
        vec![
            BalanceEntry::new("A", -100.0),
            BalanceEntry::new("B", 0.0),
            BalanceEntry::new("C", 100.0),
        ]
    );
}

#[test]
fn test_negative_amount_flips_direction() {
    let balances = compute_balances(&[tx("A", "B", -40.0)]);
    assert_eq!(balances[0], BalanceEntry::new("A", 40.0));
    assert_eq!(balances[1], BalanceEntry::new("B", -40.0));
}

#[test]
fn test_self_transaction_is_listed_and_nets_to_zero() {
    let balances = compute_balances(&[tx("A", "A", 25.0), tx("A", "B", 10.0)]);
    assert_eq!(
        balances,
        vec![BalanceEntry::new("A", -10.0), BalanceEntry::new("B", 10.0)]
    );
}

#[test]
fn test_repeated_pairs_accumulate() {
    let balances = compute_balances(&[tx("A", "B", 10.0), tx("B", "A", 4.0), tx("A", "B", 1.5)]);
    assert_eq!(balances[0].final_balance, -7.5);
    assert_eq!(balances[1].final_balance, 7.5);
}

#[test]
fn test_balances_sum_to_zero() {
    let transactions = vec![
        tx("A", "B", 12.34),
        tx("C", "A", 56.78),
        tx("B", "D", 9.99),
        tx("D", "C", 0.01),
    ];
    let total: f64 = compute_balances(&transactions).iter().map(|b| b.final_balance).sum();
    assert!(total.abs() < 1e-9);
}
