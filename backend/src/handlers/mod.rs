//! HTTP handlers for the Stock Ledger Platform

pub mod dispatch;
pub mod health;
pub mod partner;
pub mod stock;
pub mod transaction;

pub use dispatch::*;
pub use health::*;
pub use partner::*;
pub use stock::*;
pub use transaction::*;
