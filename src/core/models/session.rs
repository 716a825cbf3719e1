use super::transaction::Transaction;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Server-held transaction list for one client, built up entry by entry.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub id: String,
    pub transactions: Vec<Transaction>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
