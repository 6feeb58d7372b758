//! Shared types and models for the Stock Ledger Platform
//!
//! This crate contains the domain models, wire types, validation rules, and
//! the pure ledger arithmetic shared between the backend and its tests.

pub mod ledger;
pub mod models;
pub mod types;
pub mod validation;

pub use ledger::*;
pub use models::*;
pub use types::*;
pub use validation::*;
