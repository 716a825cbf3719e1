use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::ClearLedgerError;
use crate::core::models::Transaction;

/// Documented shape of every transaction-carrying request body.
///
/// The handlers decode bodies leniently, so field names may also be
/// capitalised (`Debtor`, `Creditor`, `Amount`) and amounts may be strings.
#[derive(Deserialize, ToSchema)]
pub struct TransactionsRequest {
    pub transactions: Vec<Transaction>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddTransactionRequest {
    #[serde(default, alias = "Debtor")]
    pub debtor: String,
    #[serde(default, alias = "Creditor")]
    pub creditor: String,
    #[serde(default, alias = "Amount")]
    pub amount: f64,
}

#[derive(Serialize, ToSchema)]
pub struct BalanceChartResponse {
    /// Chart.js configuration for the balance bar chart
    #[schema(value_type = Object)]
    pub chart: serde_json::Value,
    /// SVG QR code carrying the settlement summary
    pub qr: String,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for ClearLedgerError to implement IntoResponse
pub struct ApiError(pub ClearLedgerError);

impl From<ClearLedgerError> for ApiError {
    fn from(err: ClearLedgerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            ClearLedgerError::SessionNotFound(id) => (StatusCode::NOT_FOUND, format!("Session {} not found", id)),
            ClearLedgerError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, detail.description),
            ),
            ClearLedgerError::RenderError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Render error: {}", msg)),
            ClearLedgerError::ExportError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Export error: {}", msg)),
        };
        if status.is_server_error() {
            error!("{}", error_message);
        }
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
