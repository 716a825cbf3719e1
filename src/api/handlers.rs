use crate::{
    api::{decode::parse_transactions, models::*},
    core::{
        errors::ClearLedgerError,
        models::{CalculationResult, Session, Transaction},
        services::LedgerService,
    },
    export::{
        chart::balance_chart_config,
        csv::{balances_csv, settlements_csv},
        invoice::render_invoice_svg,
        qr::settlement_qr_svg,
        summary::settlements_text,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use http::header;
use std::sync::Arc;

pub type SharedService = Arc<LedgerService<InMemoryStorage>>;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/summary", post(summary))
        .route("/qr", post(settlement_qr))
        .route("/invoice", post(invoice))
        .route("/invoice-pdf", post(invoice))
        .route("/balance-chart", post(balance_chart))
        .route("/export/balances", post(export_balances))
        .route("/export/settlements", post(export_settlements))
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session).delete(delete_session))
        .route(
            "/sessions/{session_id}/transactions",
            post(add_transaction).delete(reset_session),
        )
        .route("/sessions/{session_id}/calculate", post(calculate_session))
        .with_state(service)
}

/// Reads a request body as JSON regardless of its declared content type.
fn decode_body(body: &Bytes) -> Result<Vec<Transaction>, ApiError> {
    let payload: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ClearLedgerError::invalid_input("body", "Invalid JSON", format!("Request body is not JSON: {}", e)))?;
    Ok(parse_transactions(&payload))
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/calculate",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Balances and settlements", body = CalculationResult),
        (status = 400, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn calculate(State(service): State<SharedService>, body: Bytes) -> Result<Json<CalculationResult>, ApiError> {
    let transactions = decode_body(&body)?;
    Ok(Json(service.calculate(&transactions)))
}

#[utoipa::path(
    post,
    path = "/api/summary",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Plain-text settlement summary", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn summary(State(service): State<SharedService>, body: Bytes) -> Result<Response, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    Ok(([(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], settlements_text(&result.settlements)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/qr",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "QR code of the settlement summary", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Summary too large to encode", body = ErrorResponse)
    )
)]
pub async fn settlement_qr(State(service): State<SharedService>, body: Bytes) -> Result<Response, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    let qr = settlement_qr_svg(&result.settlements)?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], qr).into_response())
}

#[utoipa::path(
    post,
    path = "/api/invoice",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Paginated invoice document", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn invoice(State(service): State<SharedService>, body: Bytes) -> Result<Response, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    let qr = settlement_qr_svg(&result.settlements)?;
    let document = render_invoice_svg(&result.settlements, &qr);
    Ok(attachment(SVG_CONTENT_TYPE, "settlement_invoice.svg", document))
}

#[utoipa::path(
    post,
    path = "/api/balance-chart",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Chart.js configuration with QR code", body = BalanceChartResponse),
        (status = 400, description = "Body is not JSON", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    )
)]
pub async fn balance_chart(
    State(service): State<SharedService>,
    body: Bytes,
) -> Result<Json<BalanceChartResponse>, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    let qr = settlement_qr_svg(&result.settlements)?;
    Ok(Json(BalanceChartResponse {
        chart: balance_chart_config(&result.balances),
        qr,
    }))
}

#[utoipa::path(
    post,
    path = "/api/export/balances",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Final balances as CSV", body = String, content_type = "text/csv"),
        (status = 400, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn export_balances(State(service): State<SharedService>, body: Bytes) -> Result<Response, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    Ok(attachment(CSV_CONTENT_TYPE, "final_balances.csv", balances_csv(&result.balances)?))
}

#[utoipa::path(
    post,
    path = "/api/export/settlements",
    request_body = TransactionsRequest,
    responses(
        (status = 200, description = "Final settlements as CSV", body = String, content_type = "text/csv"),
        (status = 400, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn export_settlements(State(service): State<SharedService>, body: Bytes) -> Result<Response, ApiError> {
    let transactions = decode_body(&body)?;
    let result = service.calculate(&transactions);
    Ok(attachment(
        CSV_CONTENT_TYPE,
        "final_settlements.csv",
        settlements_csv(&result.settlements)?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    responses(
        (status = 201, description = "Session created", body = Session),
        (status = 400, description = "Session limit reached", body = ErrorResponse)
    )
)]
pub async fn create_session(State(service): State<SharedService>) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = service.create_session().await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "ID of the session")
    ),
    responses(
        (status = 200, description = "Session retrieved", body = Session),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn get_session(
    State(service): State<SharedService>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(service.get_session(&session_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}",
    params(
        ("session_id" = String, Path, description = "ID of the session")
    ),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn delete_session(
    State(service): State<SharedService>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_session(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/transactions",
    params(
        ("session_id" = String, Path, description = "ID of the session")
    ),
    request_body = AddTransactionRequest,
    responses(
        (status = 200, description = "Transaction added", body = Session),
        (status = 400, description = "Blank name, non-positive amount or full session", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn add_transaction(
    State(service): State<SharedService>,
    Path(session_id): Path<String>,
    Json(req): Json<AddTransactionRequest>,
) -> Result<Json<Session>, ApiError> {
    let session = service
        .add_transaction(&session_id, &req.debtor, &req.creditor, req.amount)
        .await?;
    Ok(Json(session))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}/transactions",
    params(
        ("session_id" = String, Path, description = "ID of the session")
    ),
    responses(
        (status = 200, description = "All transactions removed", body = Session),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn reset_session(
    State(service): State<SharedService>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    Ok(Json(service.reset_session(&session_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{session_id}/calculate",
    params(
        ("session_id" = String, Path, description = "ID of the session")
    ),
    responses(
        (status = 200, description = "Balances and settlements for the session", body = CalculationResult),
        (status = 404, description = "Session not found", body = ErrorResponse)
    )
)]
pub async fn calculate_session(
    State(service): State<SharedService>,
    Path(session_id): Path<String>,
) -> Result<Json<CalculationResult>, ApiError> {
    Ok(Json(service.calculate_session(&session_id).await?))
}
