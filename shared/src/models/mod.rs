//! Domain models for the Stock Ledger Platform

pub mod dispatch;
pub mod partner;
pub mod stock;
pub mod transaction;

pub use dispatch::*;
pub use partner::*;
pub use stock::*;
pub use transaction::*;
