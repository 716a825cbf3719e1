use crate::core::models::SettlementEntry;

pub const NO_SETTLEMENTS: &str = "No settlements.";
pub const SUMMARY_HEADING: &str = "Final Settlements:";

/// Formats one settlement as `"{from} -> {to} : {amount}"`.
pub fn settlement_line(entry: &SettlementEntry) -> String {
    format!("{} -> {} : {:.2}", entry.from, entry.to, entry.amount)
}

/// Human-readable summary shared as text and encoded into the QR code.
pub fn settlements_text(settlements: &[SettlementEntry]) -> String {
    if settlements.is_empty() {
        return NO_SETTLEMENTS.to_string();
    }
    let mut lines = vec![SUMMARY_HEADING.to_string(), String::new()];
    lines.extend(settlements.iter().map(settlement_line));
    lines.join("\n")
}
