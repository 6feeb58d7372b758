//! Database models for the Stock Ledger Platform
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
