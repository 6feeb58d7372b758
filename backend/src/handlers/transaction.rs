//! HTTP handlers for the transaction report

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::TransactionService;
use crate::AppState;
use crate::models::{TransactionFilter, TransactionView};
use shared::types::{normalize_page, PaginatedResponse, TransactionKind};

#[derive(Deserialize)]
pub struct TransactionQuery {
    pub partner: Option<String>,
    pub article: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Kept as raw text so malformed numbers default to page 1
    pub page: Option<String>,
}

/// Serve one page of the filtered transaction log
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> AppResult<Json<PaginatedResponse<TransactionView>>> {
    let filter = TransactionFilter {
        partner: query.partner,
        article: query.article,
        kind: query.kind.as_deref().and_then(TransactionKind::from_filter),
        page: normalize_page(query.page.as_deref()),
    };

    let service = TransactionService::new(state.db);
    let page = service.list_transactions(filter).await?;
    Ok(Json(page))
}
