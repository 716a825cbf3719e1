use crate::core::models::Transaction;
use serde_json::{Map, Value};
use tracing::debug;

/// Decodes `payload.transactions` into core transactions.
///
/// Each field is looked up under its lowercase key first and its capitalised
/// key second (`debtor`/`Debtor`, `creditor`/`Creditor`, `amount`/`Amount`).
/// The second key is consulted whenever the first is absent or holds an
/// empty value (`null`, `false`, `""`, `0`). Entries without both names or
/// without a usable amount are dropped; the batch itself never fails.
pub fn parse_transactions(payload: &Value) -> Vec<Transaction> {
    let Some(items) = payload.get("transactions").and_then(Value::as_array) else {
        debug!("Payload has no transactions array");
        return Vec::new();
    };

    let transactions: Vec<Transaction> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let decoded = item.as_object().and_then(decode_transaction);
            if decoded.is_none() {
                debug!("Dropping malformed transaction at index {}: {}", index, item);
            }
            decoded
        })
        .collect();

    debug!("Decoded {} of {} transactions", transactions.len(), items.len());
    transactions
}

fn decode_transaction(item: &Map<String, Value>) -> Option<Transaction> {
    let debtor = lookup(item, "debtor", "Debtor").and_then(as_name)?;
    let creditor = lookup(item, "creditor", "Creditor").and_then(as_name)?;
    let amount = lookup(item, "amount", "Amount").and_then(as_amount)?;
    Some(Transaction::new(debtor, creditor, amount))
}

fn lookup<'a>(item: &'a Map<String, Value>, key: &str, fallback: &str) -> Option<&'a Value> {
    item.get(key)
        .filter(|value| is_present(value))
        .or_else(|| item.get(fallback))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn as_name(value: &Value) -> Option<String> {
    if !is_present(value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}
