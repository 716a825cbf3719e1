use utoipa::OpenApi;

use crate::{
    api::models::{AddTransactionRequest, BalanceChartResponse, ErrorResponse, TransactionsRequest},
    core::models::{BalanceEntry, CalculationResult, Session, SettlementEntry, Transaction},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::calculate,
        super::handlers::summary,
        super::handlers::settlement_qr,
        super::handlers::invoice,
        super::handlers::balance_chart,
        super::handlers::export_balances,
        super::handlers::export_settlements,
        super::handlers::create_session,
        super::handlers::get_session,
        super::handlers::delete_session,
        super::handlers::add_transaction,
        super::handlers::reset_session,
        super::handlers::calculate_session
    ),
    components(schemas(
        TransactionsRequest,
        AddTransactionRequest,
        BalanceChartResponse,
        ErrorResponse,
        Transaction,
        BalanceEntry,
        SettlementEntry,
        CalculationResult,
        Session
    )),
    info(
        title = "ClearLedger API",
        description = "Net pairwise debts and compute the payments that settle them",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
