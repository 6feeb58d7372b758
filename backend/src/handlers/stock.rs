//! HTTP handlers for the stock ledger endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::AppResult;
use crate::services::StockService;
use crate::AppState;
use crate::models::{AddStockInput, StockEntryView, StockOutcome};

/// Record a buy: 201 when the (partner, article) row is created, 200 when an
/// existing row accumulates
pub async fn add_stock(
    State(state): State<AppState>,
    Json(input): Json<AddStockInput>,
) -> AppResult<impl IntoResponse> {
    let service = StockService::new(state.db);
    let (outcome, stock) = service.add_stock(input).await?;

    let status = match outcome {
        StockOutcome::Created => StatusCode::CREATED,
        StockOutcome::Updated => StatusCode::OK,
    };

    Ok((status, Json(stock)))
}

/// List all stock rows with their partner names
pub async fn list_stocks(State(state): State<AppState>) -> AppResult<Json<Vec<StockEntryView>>> {
    let service = StockService::new(state.db);
    let stocks = service.list_stocks().await?;
    Ok(Json(stocks))
}
