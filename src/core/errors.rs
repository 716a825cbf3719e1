use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum ClearLedgerError {
    /// Session with given ID not found
    #[error("Session {0} not found")]
    SessionNotFound(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// QR code, invoice or chart could not be produced
    #[error("Render error: {0}")]
    RenderError(String),

    /// CSV serialisation failed
    #[error("Export error: {0}")]
    ExportError(String),
}

impl ClearLedgerError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        ClearLedgerError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.into(),
                description: description.into(),
            },
        )
    }
}
