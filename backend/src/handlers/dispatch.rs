//! HTTP handlers for the dispatch endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::AppResult;
use crate::services::DispatchService;
use crate::AppState;
use crate::models::{CreateDispatchInput, DispatchView};

/// Record a sell-side shipment
pub async fn create_dispatch(
    State(state): State<AppState>,
    Json(input): Json<CreateDispatchInput>,
) -> AppResult<impl IntoResponse> {
    let service = DispatchService::new(state.db);
    let created = service.create_dispatch(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all dispatches with their partner names, newest first
pub async fn list_dispatches(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DispatchView>>> {
    let service = DispatchService::new(state.db);
    let dispatches = service.list_dispatches().await?;
    Ok(Json(dispatches))
}
