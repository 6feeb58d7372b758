//! Route definitions for the Stock Ledger Platform

use axum::{middleware, routing::get, Router};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Protected routes - stock ledger
        .nest("/stocks", stock_routes(state.clone()))
        // Protected routes - dispatches
        .nest("/dispatches", dispatch_routes(state.clone()))
        // Protected routes - transaction report
        .nest("/transactions", transaction_routes(state.clone()))
        // Protected routes - partner/article listings
        .nest("/partners", partner_routes(state))
}

/// Stock ledger routes (protected)
fn stock_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stocks).post(handlers::add_stock))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Dispatch routes (protected)
fn dispatch_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_dispatches).post(handlers::create_dispatch),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Transaction report routes (protected)
fn transaction_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_transactions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Partner/article listing routes (protected)
fn partner_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_lookup))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
