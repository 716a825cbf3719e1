use crate::core::errors::ClearLedgerError;
use crate::core::models::{BalanceEntry, SettlementEntry};
use csv::Writer;

pub const BALANCES_HEADER: [&str; 2] = ["Name", "FinalBalance"];
pub const SETTLEMENTS_HEADER: [&str; 3] = ["From", "To", "Amount"];

pub fn balances_csv(balances: &[BalanceEntry]) -> Result<String, ClearLedgerError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(BALANCES_HEADER).map_err(export_error)?;
    for balance in balances {
        let amount = balance.final_balance.to_string();
        writer
            .write_record([balance.name.as_str(), amount.as_str()])
            .map_err(export_error)?;
    }
    finish(writer)
}

pub fn settlements_csv(settlements: &[SettlementEntry]) -> Result<String, ClearLedgerError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(SETTLEMENTS_HEADER).map_err(export_error)?;
    for settlement in settlements {
        let amount = settlement.amount.to_string();
        writer
            .write_record([settlement.from.as_str(), settlement.to.as_str(), amount.as_str()])
            .map_err(export_error)?;
    }
    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ClearLedgerError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ClearLedgerError::ExportError(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ClearLedgerError::ExportError(format!("CSV is not valid UTF-8: {}", e)))
}

fn export_error(e: csv::Error) -> ClearLedgerError {
    ClearLedgerError::ExportError(format!("Failed to write CSV row: {}", e))
}
